//! Integration tests for address book operations.
//!
//! These exercise the store through its public API the way the command
//! handlers do: construct records, mutate them in place, and query the book.

use contact_book::domain::Name;
use contact_book::{AddressBook, Record};

fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(Name::new(name).unwrap());
    for phone in phones {
        assert!(record.add_phone(phone).unwrap());
    }
    record
}

#[test]
fn test_full_record_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    book.add_record(record_with_phones("john", &["1234567890", "5555555555"]));
    book.add_record(record_with_phones("jane", &["9876543210"]));
    assert_eq!(book.len(), 2);

    // READ, with messy lookup keys
    let john = book.find("  JOHN ").unwrap();
    assert_eq!(john.name().as_str(), "John");
    assert_eq!(john.phones().len(), 2);

    // UPDATE
    let john = book.find_mut("john").unwrap();
    assert!(john.edit_phone("1234567890", "1112223333").unwrap());
    assert!(john.remove_phone("5555555555"));
    assert_eq!(
        book.find("John").unwrap().phones()[0].as_str(),
        "1112223333"
    );

    // DELETE
    assert!(book.delete("jane"));
    assert!(book.find("jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_duplicate_phone_add_is_idempotent() {
    let mut record = record_with_phones("ann", &["1234567890"]);
    assert!(!record.add_phone("1234567890").unwrap());
    assert_eq!(record.phones().len(), 1);
}

#[test]
fn test_failed_validation_leaves_record_untouched() {
    let mut record = record_with_phones("ann", &["1234567890"]);

    assert!(record.add_phone("12345").is_err());
    assert!(record.edit_phone("1234567890", "nope").is_err());

    assert_eq!(record.phones().len(), 1);
    assert_eq!(record.phones()[0].as_str(), "1234567890");
}

#[test]
fn test_rendering_matches_store_order() {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("zoe", &["1111111111"]));
    book.add_record(record_with_phones("abe", &["2222222222"]));

    let rendered = book.to_string();
    let zoe_at = rendered.find("Zoe").unwrap();
    let abe_at = rendered.find("Abe").unwrap();
    assert!(zoe_at < abe_at);
}

#[cfg(feature = "birthdays")]
mod birthdays {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_upcoming_birthdays_across_a_mixed_book() {
        let mut book = AddressBook::new();

        // Monday
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        // Wednesday this week: qualifies unshifted
        let mut alice = record_with_phones("alice", &["1111111111"]);
        alice.add_birthday("12.06.1990").unwrap();
        book.add_record(alice);

        // Saturday this week: qualifies, shifted to Monday
        let mut bob = record_with_phones("bob", &["2222222222"]);
        bob.add_birthday("15.06.1985").unwrap();
        book.add_record(bob);

        // Already passed this year: rolls to 2025, out of window
        let mut carol = record_with_phones("carol", &["3333333333"]);
        carol.add_birthday("01.06.1970").unwrap();
        book.add_record(carol);

        // No birthday set: skipped
        book.add_record(record_with_phones("dave", &["4444444444"]));

        let upcoming = book.upcoming_birthdays(today, 7);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].name, "Alice");
        assert_eq!(upcoming[0].congratulation_date, "2024.06.12");
        assert_eq!(upcoming[1].name, "Bob");
        assert_eq!(upcoming[1].congratulation_date, "2024.06.17");
    }

    #[test]
    fn test_widened_window_picks_up_later_birthdays() {
        let mut book = AddressBook::new();
        let mut eve = record_with_phones("eve", &["5555555555"]);
        eve.add_birthday("24.06.1995").unwrap();
        book.add_record(eve);

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(book.upcoming_birthdays(today, 7).is_empty());
        assert_eq!(book.upcoming_birthdays(today, 15).len(), 1);
    }

    #[test]
    fn test_overwriting_record_drops_its_birthday() {
        let mut book = AddressBook::new();
        let mut ann = record_with_phones("ann", &["1234567890"]);
        ann.add_birthday("12.06.1990").unwrap();
        book.add_record(ann);

        // A fresh record under the same normalized name replaces the old one
        book.add_record(record_with_phones("ANN", &["9876543210"]));

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(book.upcoming_birthdays(today, 7).is_empty());
        assert!(book.find("ann").unwrap().birthday().is_none());
    }
}
