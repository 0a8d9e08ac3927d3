//! Partial edits to a player.

use crate::domain::{Address, EmailAddress, Name, PhoneNumber, Tag};
use crate::models::Player;
use std::collections::BTreeSet;

/// The set of fields an edit replaces. Fields left as `None` are copied from
/// the player being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerChanges {
    pub name: Option<Name>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<EmailAddress>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl PlayerChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// True if at least one field would be replaced.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `player`.
    pub fn apply_to(&self, player: &Player) -> Player {
        Player::new(
            self.name.clone().unwrap_or_else(|| player.name().clone()),
            self.phone.clone().unwrap_or_else(|| player.phone().clone()),
            self.email.clone().unwrap_or_else(|| player.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| player.address().clone()),
            self.tags.clone().unwrap_or_else(|| player.tags().clone()),
        )
    }
}
