//! Record model representing one stored contact.

#[cfg(feature = "birthdays")]
use crate::domain::Birthday;
use crate::domain::{Name, Phone, ValidationError};
use serde::Serialize;
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction and doubles as the address book key.
/// Phone numbers keep their insertion order and are unique by literal string
/// comparison.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[cfg(feature = "birthdays")]
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            #[cfg(feature = "birthdays")]
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and add a phone number.
    ///
    /// Returns `Ok(false)` without mutating when the number is already
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a malformed number.
    pub fn add_phone(&mut self, number: &str) -> Result<bool, ValidationError> {
        if self.phone_index(number).is_some() {
            return Ok(false);
        }
        self.phones.push(Phone::new(number)?);
        Ok(true)
    }

    /// Remove a phone number by exact string match.
    ///
    /// Returns whether a number was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phone_index(number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with a freshly validated phone for `new`, keeping the
    /// slot position.
    ///
    /// Returns `Ok(false)` when `old` is not stored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for a malformed `new`; the
    /// old number stays in place in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.phone_index(old) {
            Some(index) => {
                self.phones[index] = Phone::new(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Look up a stored phone by exact string match.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phone_index(number).map(|index| &self.phones[index])
    }

    /// The contact's birthday, if one has been set.
    #[cfg(feature = "birthdays")]
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or overwrite the contact's birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for a malformed date; the
    /// previous birthday, if any, is kept.
    #[cfg(feature = "birthdays")]
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    fn phone_index(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        #[cfg(feature = "birthdays")]
        match &self.birthday {
            Some(birthday) => write!(f, " Birthday: {}", birthday)?,
            None => write!(f, " Birthday: not set")?,
        }
        Ok(())
    }
}
