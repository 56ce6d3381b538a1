/**
 * person module
 * Name parsing and mutual friendships
 */

mod name;
mod person;

pub use name::PersonName;
pub use person::Person;

use crate::errors::Result;

/// Factory for a [`Person`], equivalent to [`Person::new`]
pub fn create_person(full_name: &str) -> Result<Person> {
    Person::new(full_name)
}
