//! Summoners Book - a registry of game players with persistent JSON storage.
//!
//! The book keeps an ordered list of players that never holds two players
//! with the same name, exposes a live filtered view over that list, and
//! saves and loads the whole book as a single JSON document.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, address, tag)
//! - **models**: The player aggregate and partial edits
//! - **registry**: Unique player list, the book, and the filtered projection
//! - **matching**: Filter predicates (keywords, tags, fuzzy name)
//! - **services**: The model manager that command handlers talk to
//! - **storage**: JSON serialization adapter and file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod registry;
pub mod services;
pub mod storage;

pub use config::Config;
pub use domain::{Address, EmailAddress, Name, PhoneNumber, Tag, ValueFormatError};
pub use error::{ConfigError, DataFormatError, DataLoadCause, RegistryError, StorageError};
pub use matching::{FuzzyNameMatcher, HasTag, NameContainsKeywords};
pub use models::{Player, PlayerChanges};
pub use registry::{FilteredView, PlayerPredicate, SummonersBook, UniquePlayerList};
pub use services::{ModelManager, PlayerService};
pub use storage::{BookStorage, JsonBookStorage};
