//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The player field a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

impl Field {
    /// Key used for this field in persisted records.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Tag => "tags",
        }
    }

    /// Human-readable rule a value of this field must satisfy.
    pub fn constraints(self) -> &'static str {
        match self {
            Self::Name => {
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            Self::Phone => {
                "Phone numbers should only contain numbers, and it should be at least 3 digits long"
            }
            Self::Email => {
                "Emails should be of the format local-part@domain, where the local-part contains \
                 only alphanumerics separated by single +_.- characters, and the domain is made \
                 of dot-separated labels ending in a label at least 2 characters long"
            }
            Self::Address => "Addresses can take any values, and it should not be blank",
            Self::Tag => "Tag names should be alphanumeric",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Tag => "Tag",
        };
        f.write_str(label)
    }
}

/// A scalar value failed its field's format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} {value:?}: {}", .field.constraints())]
pub struct ValueFormatError {
    /// Field the value was meant for
    pub field: Field,

    /// The rejected input, verbatim
    pub value: String,
}

impl ValueFormatError {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
