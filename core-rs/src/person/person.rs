//! Person handle with a mutual friendship relation
//!
//! A `Person` is a cheap, cloneable handle onto shared state. Clones refer to
//! the same person; equality and hashing follow identity, not name.
//!
//! Friend sets hold strong handles: a friend stays listed, and alive, until
//! the friendship is removed with `remove_friend`. A person that still has
//! friends is therefore freed only after those friendships are removed.
//! Both sides of a friendship are updated while holding both friend-set locks,
//! acquired in id order.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::Result;
use crate::person::name::PersonName;

struct PersonState {
    id: Uuid,
    name: PersonName,
    friends: Mutex<Vec<Person>>,
}

impl PersonState {
    fn friends_guard(&self) -> MutexGuard<'_, Vec<Person>> {
        // Every mutation leaves the list valid, so a poisoned lock is still usable
        self.friends.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A person parsed from a full name
#[derive(Clone)]
pub struct Person {
    state: Arc<PersonState>,
}

impl Person {
    /// Create a person from a full name
    ///
    /// # Arguments
    /// * `full_name` - Whitespace-separated name, e.g. "Madonna Louise Cicone"
    ///
    /// # Errors
    /// `GxError::InvalidArgument("fullName cannot be an empty string")` when the
    /// name is empty or blank.
    ///
    /// # Example
    /// ```
    /// use gx_core::Person;
    ///
    /// let person = Person::new("Madonna Cicone").unwrap();
    /// assert_eq!(person.first_name(), "Madonna");
    /// assert_eq!(person.last_name(), Some("Cicone"));
    /// ```
    pub fn new(full_name: &str) -> Result<Self> {
        let name = PersonName::parse(full_name)
            .inspect_err(|_| warn!(full_name, "rejected person name"))?;

        Ok(Self::from_name(name))
    }

    /// Create a person from already-parsed name parts
    pub fn from_name(name: PersonName) -> Self {
        let state = PersonState {
            id: Uuid::new_v4(),
            name,
            friends: Mutex::new(Vec::new()),
        };

        debug!(id = %state.id, name = %state.name, "person created");

        Self { state: Arc::new(state) }
    }

    pub fn id(&self) -> Uuid {
        self.state.id
    }

    pub fn name(&self) -> &PersonName {
        &self.state.name
    }

    pub fn first_name(&self) -> &str {
        &self.state.name.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.state.name.middle_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.state.name.last_name.as_deref()
    }

    /// Make `self` and `other` friends of each other
    ///
    /// Idempotent. Befriending oneself is ignored.
    pub fn add_friend(&self, other: &Person) {
        if self == other {
            debug!(id = %self.id(), "ignoring self-friendship");
            return;
        }

        let (mut mine, mut theirs) = self.lock_pair(other);

        if !mine.contains(other) {
            mine.push(other.clone());
        }
        if !theirs.contains(self) {
            theirs.push(self.clone());
        }

        debug!(person = %self, friend = %other, "friendship added");
    }

    /// End the friendship between `self` and `other` on both sides
    ///
    /// No-op if they are not friends.
    pub fn remove_friend(&self, other: &Person) {
        if self == other {
            return;
        }

        let (mut mine, mut theirs) = self.lock_pair(other);
        mine.retain(|friend| friend != other);
        theirs.retain(|friend| friend != self);

        debug!(person = %self, friend = %other, "friendship removed");
    }

    /// Current friends, in the order the friendships were made
    pub fn friends(&self) -> Vec<Person> {
        self.state.friends_guard().clone()
    }

    pub fn is_friend_of(&self, other: &Person) -> bool {
        self.state.friends_guard().contains(other)
    }

    pub fn friend_count(&self) -> usize {
        self.state.friends_guard().len()
    }

    /// Lock both friend sets in id order, returned as (self, other)
    fn lock_pair<'a>(
        &'a self,
        other: &'a Person,
    ) -> (MutexGuard<'a, Vec<Person>>, MutexGuard<'a, Vec<Person>>) {
        if self.id() < other.id() {
            let mine = self.state.friends_guard();
            let theirs = other.state.friends_guard();
            (mine, theirs)
        } else {
            let theirs = other.state.friends_guard();
            let mine = self.state.friends_guard();
            (mine, theirs)
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state.name)
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Friends are listed by id only; printing them in full would recurse
        let friend_ids: Vec<Uuid> = self.state.friends_guard().iter().map(Person::id).collect();
        f.debug_struct("Person")
            .field("id", &self.state.id)
            .field("name", &self.state.name)
            .field("friends", &friend_ids)
            .finish()
    }
}
