//! PhoneNumber value object.

use super::errors::{Field, ValueFormatError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 3;

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored as a plain run of ASCII digits. Formatting
/// characters such as `+`, `-` or spaces are rejected rather than stripped,
/// so what is stored is exactly what was entered.
///
/// # Example
///
/// ```
/// use summoners_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("93121534").unwrap();
/// assert_eq!(phone.as_str(), "93121534");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Only ASCII digits
    /// - At least `MIN_PHONE_DIGITS` digits
    ///
    /// # Errors
    ///
    /// Returns a `ValueFormatError` for `Field::Phone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValueFormatError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValueFormatError::new(Field::Phone, phone));
        }

        Ok(Self(phone))
    }

    /// Check whether a string is a valid phone number.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() >= MIN_PHONE_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
