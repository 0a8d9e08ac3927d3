//! Address value object.

use super::errors::{Field, ValueFormatError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A free-form postal address. Anything goes as long as it does not start
/// with whitespace (which also rules out blank addresses).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns a `ValueFormatError` for `Field::Address` if the address is blank
    /// or starts with whitespace.
    pub fn new(address: impl Into<String>) -> Result<Self, ValueFormatError> {
        let address = address.into();

        if !Self::is_valid(&address) {
            return Err(ValueFormatError::new(Field::Address, address));
        }

        Ok(Self(address))
    }

    pub fn is_valid(address: &str) -> bool {
        address.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
