//! Error types for the summoners book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value-level validation failures live next to the value objects in
//! [`domain::errors`](crate::domain::errors).

use crate::domain::ValueFormatError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by registry mutations.
///
/// A failed call never changes the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another player with the same identity is already registered
    #[error("Operation would result in duplicate players: {name}")]
    DuplicatePlayer { name: String },

    /// No registered player is field-for-field equal to the target
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}

/// Identifies a record inside a persisted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    /// Zero-based position in the `players` array
    pub index: usize,

    /// The raw `name` value, when the record had one
    pub name: Option<String>,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "player #{} ({:?})", self.index, name),
            None => write!(f, "player #{}", self.index),
        }
    }
}

/// A persisted player record does not describe a valid player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataFormatError {
    /// A required key is absent
    #[error("{record}: {field} field is missing")]
    MissingField { record: RecordRef, field: &'static str },

    /// The record carries a key the format does not define
    #[error("{record}: unknown field {field:?}")]
    UnknownField { record: RecordRef, field: String },

    /// A key holds the wrong kind of JSON value
    #[error("{record}: {field} field must be {expected}")]
    WrongType {
        record: RecordRef,
        field: &'static str,
        expected: &'static str,
    },

    /// A key is present but its value fails validation
    #[error("{record}: {source}")]
    InvalidValue {
        record: RecordRef,
        #[source]
        source: ValueFormatError,
    },
}

impl DataFormatError {
    pub fn record(&self) -> &RecordRef {
        match self {
            Self::MissingField { record, .. }
            | Self::UnknownField { record, .. }
            | Self::WrongType { record, .. }
            | Self::InvalidValue { record, .. } => record,
        }
    }
}

/// Why a data file could not be turned into a book.
#[derive(Error, Debug)]
pub enum DataLoadCause {
    /// Not well-formed JSON, or not shaped like a book document
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record failed validation
    #[error("invalid player data: {0}")]
    Format(#[from] DataFormatError),

    /// Two records share an identity
    #[error("players list contains duplicate player(s): {0}")]
    Duplicate(#[from] RegistryError),
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file system failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its contents cannot be loaded
    #[error("Failed to load data from {}: {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: DataLoadCause,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
