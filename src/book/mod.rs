//! The in-memory address book.
//!
//! An insertion-ordered mapping from normalized name to [`Record`]. Lookups
//! and deletions normalize their argument the same way [`Name`] construction
//! does, so `" alice "`, `"ALICE"`, and `"Alice"` all address the same
//! record.

use crate::domain::Name;
#[cfg(feature = "birthdays")]
use crate::models::UpcomingBirthday;
use crate::models::Record;
#[cfg(feature = "birthdays")]
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;

/// The keyed in-memory store of contact records.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its normalized name.
    ///
    /// A second record under the same name overwrites the first, keeping the
    /// original insertion position.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name, normalizing the argument first.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&Name::normalize(name))
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&Name::normalize(name))
    }

    /// Remove a record by name, normalizing the argument first.
    ///
    /// Returns whether a record existed. The insertion order of the
    /// remaining records is preserved.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.shift_remove(&Name::normalize(name)).is_some()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate over records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday falls within `window_days` days of
    /// `today`, with weekend occurrences congratulated on the following
    /// Monday.
    ///
    /// A birthday qualifies when the days until its next occurrence lie in
    /// `[0, window_days)`. Results follow store iteration order. `today` is
    /// explicit so callers and tests share one code path.
    #[cfg(feature = "birthdays")]
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = birthday.next_occurrence(today);
                let days_until = (occurrence - today).num_days();
                if (0..window_days).contains(&days_until) {
                    Some(UpcomingBirthday::from_occurrence(
                        record.name().as_str(),
                        occurrence,
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in self.records.values() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_phone(name: &str, phone: &str) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_find_normalizes_argument() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("alice", "0501234567"));

        assert!(book.find("  alice ").is_some());
        assert!(book.find("ALICE").is_some());
        assert!(book.find("Alice").is_some());
        assert!(book.find("bob").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("alice", "0501234567"));
        book.add_record(record_with_phone("ALICE", "0507654321"));

        assert_eq!(book.len(), 1);
        let record = book.find("alice").unwrap();
        assert_eq!(record.phones()[0].as_str(), "0507654321");
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        assert!(!book.delete("Bob"));

        book.add_record(record_with_phone("bob", "0501234567"));
        assert!(book.delete("Bob"));
        assert!(book.find("Bob").is_none());
        assert!(!book.delete("Bob"));
    }

    #[test]
    fn test_delete_preserves_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("alice", "0501111111"));
        book.add_record(record_with_phone("bob", "0502222222"));
        book.add_record(record_with_phone("carol", "0503333333"));

        assert!(book.delete("bob"));
        let names: Vec<_> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn test_display_lists_records_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("bob", "0502222222"));
        book.add_record(record_with_phone("alice", "0501111111"));

        let rendered = book.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Bob"));
        assert!(lines[1].contains("Alice"));
    }

    #[cfg(feature = "birthdays")]
    mod upcoming {
        use super::*;
        use chrono::NaiveDate;

        fn book_with_birthday(name: &str, birthday: &str) -> AddressBook {
            let mut book = AddressBook::new();
            let mut record = record_with_phone(name, "0501234567");
            record.add_birthday(birthday).unwrap();
            book.add_record(record);
            book
        }

        fn today() -> NaiveDate {
            // A Monday
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        }

        #[test]
        fn test_midweek_birthday_is_unshifted() {
            // 12 June 2024 is a Wednesday
            let book = book_with_birthday("alice", "12.06.1990");
            let upcoming = book.upcoming_birthdays(today(), 7);
            assert_eq!(upcoming.len(), 1);
            assert_eq!(upcoming[0].name, "Alice");
            assert_eq!(upcoming[0].congratulation_date, "2024.06.12");
        }

        #[test]
        fn test_saturday_birthday_shifts_to_monday() {
            // 15 June 2024 is a Saturday
            let book = book_with_birthday("bob", "15.06.1985");
            let upcoming = book.upcoming_birthdays(today(), 7);
            assert_eq!(upcoming.len(), 1);
            assert_eq!(upcoming[0].congratulation_date, "2024.06.17");
        }

        #[test]
        fn test_sunday_birthday_shifts_to_monday() {
            // 16 June 2024 is a Sunday
            let book = book_with_birthday("carol", "16.06.1985");
            let upcoming = book.upcoming_birthdays(today(), 7);
            assert_eq!(upcoming.len(), 1);
            assert_eq!(upcoming[0].congratulation_date, "2024.06.17");
        }

        #[test]
        fn test_birthday_today_qualifies() {
            let book = book_with_birthday("dan", "10.06.2000");
            let upcoming = book.upcoming_birthdays(today(), 7);
            assert_eq!(upcoming.len(), 1);
        }

        #[test]
        fn test_window_end_is_exclusive() {
            // Exactly seven days out
            let book = book_with_birthday("eve", "17.06.2000");
            assert!(book.upcoming_birthdays(today(), 7).is_empty());
        }

        #[test]
        fn test_passed_birthday_rolls_to_next_year() {
            // Next occurrence is 9 June 2025, far outside the window
            let book = book_with_birthday("frank", "09.06.1990");
            assert!(book.upcoming_birthdays(today(), 7).is_empty());
        }

        #[test]
        fn test_year_rollover_within_window() {
            // 2 January 2025 falls within seven days of 30 December 2024
            let book = book_with_birthday("grace", "02.01.1990");
            let late_december = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
            let upcoming = book.upcoming_birthdays(late_december, 7);
            assert_eq!(upcoming.len(), 1);
            // 2 January 2025 is a Thursday
            assert_eq!(upcoming[0].congratulation_date, "2025.01.02");
        }

        #[test]
        fn test_records_without_birthday_are_skipped() {
            let mut book = book_with_birthday("alice", "12.06.1990");
            book.add_record(record_with_phone("bob", "0507654321"));
            let upcoming = book.upcoming_birthdays(today(), 7);
            assert_eq!(upcoming.len(), 1);
        }

        #[test]
        fn test_results_follow_insertion_order() {
            let mut book = book_with_birthday("bob", "12.06.1990");
            let mut alice = record_with_phone("alice", "0501111111");
            alice.add_birthday("11.06.1992").unwrap();
            book.add_record(alice);

            let names: Vec<_> = book
                .upcoming_birthdays(today(), 7)
                .into_iter()
                .map(|entry| entry.name)
                .collect();
            assert_eq!(names, ["Bob", "Alice"]);
        }
    }
}
