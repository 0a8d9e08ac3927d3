//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar parts of a player:
//! name, phone number, email address, postal address and tags. These value
//! objects validate at construction time, so an invalid value can never be
//! represented in the registry.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::EmailAddress;
pub use errors::{Field, ValueFormatError};
pub use name::Name;
pub use phone::PhoneNumber;
pub use tag::Tag;
