//! Command handlers.
//!
//! Each handler performs one store mutation or query and returns the
//! user-facing reply. Validation failures surface as [`CommandError`] and
//! are translated to their fixed messages by the caller; a failed mutation
//! leaves the store untouched.

use crate::book::AddressBook;
use crate::domain::Name;
use crate::error::CommandResult;
use crate::models::Record;
#[cfg(feature = "birthdays")]
use chrono::NaiveDate;
use tracing::debug;

/// `add NAME PHONE`: create the record if absent, else augment it.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let name = Name::new(name)?;
    if let Some(record) = book.find_mut(name.as_str()) {
        return if record.add_phone(phone)? {
            Ok("Contact updated.".to_string())
        } else {
            Ok("Phone number already recorded.".to_string())
        };
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    debug!(name = %record.name(), "adding contact");
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change NAME OLD NEW`: replace one phone number on an existing record.
pub fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok("Contact does not exist.".to_string());
    };
    if record.edit_phone(old, new)? {
        Ok("Contact updated.".to_string())
    } else {
        Ok("Old phone number not found".to_string())
    }
}

/// `phone NAME`: render one record.
pub fn show_phone(book: &AddressBook, name: &str) -> String {
    match book.find(name) {
        Some(record) => record.to_string(),
        None => "Contact not found".to_string(),
    }
}

/// `all`: render the whole book.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        "Contacts not found.".to_string()
    } else {
        book.to_string()
    }
}

/// `delete NAME`: remove one record.
pub fn delete_contact(book: &mut AddressBook, name: &str) -> String {
    if book.delete(name) {
        debug!(%name, "deleted contact");
        "Contact deleted.".to_string()
    } else {
        "Contact not found".to_string()
    }
}

/// `add-birthday NAME DATE`: set or overwrite a record's birthday.
#[cfg(feature = "birthdays")]
pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok("Contact not found".to_string());
    };
    record.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday NAME`: render a record's stored birthday.
#[cfg(feature = "birthdays")]
pub fn show_birthday(book: &AddressBook, name: &str) -> String {
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => birthday.to_string(),
            None => "Birthday not set.".to_string(),
        },
        None => "Contact not found".to_string(),
    }
}

/// `birthdays`: list contacts to congratulate within the window.
#[cfg(feature = "birthdays")]
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
