//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact name, normalized at construction time.
///
/// The normalized form doubles as the address book's lookup key, so lookups
/// with `" alice "` or `"ALICE"` resolve to the record stored as `"Alice"`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("  alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the input is empty after
    /// trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(name.as_ref());
        if normalized.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(normalized))
    }

    /// Normalize a raw name: trim, upper-case the first character,
    /// lower-case the rest.
    pub fn normalize(raw: &str) -> String {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    /// Get the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with normalization
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
