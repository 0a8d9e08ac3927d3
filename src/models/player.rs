//! Player model: one registered person and their contact details.

use crate::domain::{Address, EmailAddress, Name, PhoneNumber, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// A player in the summoners book.
///
/// Players are immutable. Edits go through the `with_*` methods (or
/// [`PlayerChanges`](crate::models::PlayerChanges)), which return a new
/// player and leave the receiver untouched.
///
/// Two notions of sameness exist:
/// - `==` compares every field, tags included.
/// - [`Player::is_same_player`] compares names only and decides uniqueness
///   inside the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: Name,
    phone: PhoneNumber,
    email: EmailAddress,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Player {
    /// Create a player from already-validated parts. Duplicate tags collapse.
    pub fn new(
        name: Name,
        phone: PhoneNumber,
        email: EmailAddress,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tags in lexicographic order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Whether `other` denotes the same real-world player.
    ///
    /// Only the names are compared, exactly as stored. Names differing in
    /// case or trailing spaces are different identities.
    pub fn is_same_player(&self, other: &Player) -> bool {
        self.name == other.name
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_phone(&self, phone: PhoneNumber) -> Self {
        Self {
            phone,
            ..self.clone()
        }
    }

    pub fn with_email(&self, email: EmailAddress) -> Self {
        Self {
            email,
            ..self.clone()
        }
    }

    pub fn with_address(&self, address: Address) -> Self {
        Self {
            address,
            ..self.clone()
        }
    }

    /// Replace the whole tag set.
    pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
