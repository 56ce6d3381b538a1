//! Friendship Graph Integration Tests
//!
//! Exercises friendships across many people and threads through the
//! public Person API only.

use gx_core::{create_person, Person};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn crowd(n: usize) -> Vec<Person> {
    (0..n)
        .map(|i| create_person(&format!("Person{} Middle Surname{}", i, i)).unwrap())
        .collect()
}

#[test]
fn test_everyone_befriends_everyone() {
    let people = crowd(6);

    for a in &people {
        for b in &people {
            a.add_friend(b);
        }
    }

    for person in &people {
        assert_eq!(person.friend_count(), people.len() - 1);
        let friends: HashSet<Person> = person.friends().into_iter().collect();
        assert!(!friends.contains(person));
    }
}

#[test]
fn test_friendship_survives_clones() {
    let john = create_person("John Lennon").unwrap();
    let paul = create_person("Paul McCartney").unwrap();

    let john_handle = john.clone();
    paul.add_friend(&john_handle);
    drop(john_handle);

    assert!(paul.is_friend_of(&john));
    assert!(john.is_friend_of(&paul));
}

#[test]
fn test_friends_outlive_callers_handles() {
    let john = create_person("John Lennon").unwrap();
    let paul = create_person("Paul McCartney").unwrap();
    let george = create_person("George Harrison").unwrap();

    john.add_friend(&paul);
    john.add_friend(&george);
    drop(paul);
    drop(george);

    let names: Vec<String> = john.friends().iter().map(|p| p.to_string()).collect();
    assert_eq!(names, vec!["Paul McCartney", "George Harrison"]);

    // Friend sets only change through remove_friend
    let paul = john.friends().remove(0);
    assert!(paul.is_friend_of(&john));
    john.remove_friend(&paul);

    let names: Vec<String> = john.friends().iter().map(|p| p.to_string()).collect();
    assert_eq!(names, vec!["George Harrison"]);
    assert_eq!(paul.friend_count(), 0);
}

#[test]
fn test_concurrent_mutations_keep_symmetry() {
    let people = Arc::new(crowd(8));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let people = Arc::clone(&people);
            thread::spawn(move || {
                for round in 0..50 {
                    for (i, a) in people.iter().enumerate() {
                        let b = &people[(i + t + 1) % people.len()];
                        if (round + i) % 3 == 0 {
                            b.remove_friend(a);
                        } else {
                            a.add_friend(b);
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for a in people.iter() {
        for b in people.iter() {
            assert_eq!(a.is_friend_of(b), b.is_friend_of(a), "{} / {}", a, b);
        }
    }
}

#[test]
fn test_names_are_parsed_for_each_person() {
    let people = crowd(3);
    for (i, person) in people.iter().enumerate() {
        assert_eq!(person.first_name(), format!("Person{}", i));
        assert_eq!(person.middle_name(), Some("Middle"));
        assert_eq!(person.last_name(), Some(format!("Surname{}", i).as_str()));
    }
}
