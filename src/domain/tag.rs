//! Tag value object.

use super::errors::{Field, ValueFormatError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single-word label attached to a player, e.g. `friend` or `jungler`.
///
/// Tags order lexicographically, which is the order they are listed and
/// persisted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns a `ValueFormatError` for `Field::Tag` unless the tag is one or
    /// more alphanumeric characters.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValueFormatError> {
        let tag = tag.into();

        if !Self::is_valid(&tag) {
            return Err(ValueFormatError::new(Field::Tag, tag));
        }

        Ok(Self(tag))
    }

    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(char::is_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
