//! Name value object.

use super::errors::{Field, ValueFormatError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A player's name, which is also the player's identity.
///
/// Names are compared exactly as entered: no case folding and no trimming.
/// `"Bob"`, `"bob"` and `"Bob "` are three different names.
///
/// # Example
///
/// ```
/// use summoners_book::domain::Name;
///
/// let name = Name::new("Faker 2").unwrap();
/// assert_eq!(name.as_str(), "Faker 2");
/// assert!(Name::new(" leading space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - First character must be alphanumeric
    /// - Remaining characters must be alphanumeric or spaces
    ///
    /// # Errors
    ///
    /// Returns a `ValueFormatError` for `Field::Name` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueFormatError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValueFormatError::new(Field::Name, name));
        }

        Ok(Self(name))
    }

    /// Check whether a string is a valid name.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|c| c.is_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
