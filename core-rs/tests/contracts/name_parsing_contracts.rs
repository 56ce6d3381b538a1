// Name Parsing Contract Tests
//
// A full name splits on whitespace into first / middle / last.
// Callers read these fields directly, so the positional rules are fixed.

use gx_core::{GxError, Person};

/// WHY: Two tokens are always "first last"
/// BREAKS: Every caller that reads last_name for two-word names
#[test]
fn two_tokens_are_first_and_last() {
    let pairs = [("Madonna", "Cicone"), ("Ada", "Lovelace"), ("x", "y")];

    for (first, last) in pairs {
        let person = Person::new(&format!("{} {}", first, last)).unwrap();
        assert_eq!(person.first_name(), first);
        assert_eq!(person.last_name(), Some(last));
        assert_eq!(person.middle_name(), None, "two tokens must not set a middle name");
    }
}

/// WHY: Three tokens are always "first middle last"
/// BREAKS: Middle names silently becoming last names
#[test]
fn three_tokens_are_first_middle_and_last() {
    let triples = [
        ("Madonna", "Louise", "Cicone"),
        ("Ada", "King", "Lovelace"),
        ("a", "b", "c"),
    ];

    for (first, middle, last) in triples {
        let person = Person::new(&format!("{} {} {}", first, middle, last)).unwrap();
        assert_eq!(person.first_name(), first);
        assert_eq!(person.middle_name(), Some(middle));
        assert_eq!(person.last_name(), Some(last));
    }
}

/// WHY: A single token is a first name and nothing else
#[test]
fn one_token_is_first_name_only() {
    let person = Person::new("Madonna").unwrap();
    assert_eq!(person.first_name(), "Madonna");
    assert_eq!(person.middle_name(), None);
    assert_eq!(person.last_name(), None);
}

/// WHY: The empty-name message is user visible and matched on by callers
/// BREAKS: Any caller comparing the error text
#[test]
fn empty_name_error_message_is_fixed() {
    for input in ["", " ", "\t\n"] {
        match Person::new(input) {
            Err(GxError::InvalidArgument(msg)) => {
                assert_eq!(msg, "fullName cannot be an empty string")
            }
            other => panic!("input {:?}: expected InvalidArgument, got {:?}", input, other),
        }
    }
}
