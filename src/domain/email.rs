//! EmailAddress value object.

use super::errors::{Field, ValueFormatError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// `[^\W_]` is "alphanumeric without underscore".
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alnum = r"[^\W_]+";
    let local = format!(r"{alnum}([+_.\-]{alnum})*");
    let label = format!(r"{alnum}(-{alnum})*");
    let pattern = format!(r"^{local}@({label}\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The local part is alphanumerics joined by single `+`, `_`, `.` or `-`
/// characters. The domain is dot-separated labels, each alphanumerics joined
/// by single hyphens, and the last label must be at least two characters.
///
/// # Example
///
/// ```
/// use summoners_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
/// assert!(EmailAddress::new("alice@example.c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `ValueFormatError` for `Field::Email` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueFormatError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValueFormatError::new(Field::Email, email));
        }

        Ok(Self(email))
    }

    /// Check whether a string is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
