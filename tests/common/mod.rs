//! Shared fixtures for integration tests.
//!
//! Provides a handful of typical players and a builder for one-off variants.

#![allow(dead_code)]

use summoners_book::{Address, EmailAddress, Name, PhoneNumber, Player, SummonersBook, Tag};

/// Builds a valid player, defaulting every field to Alice's values.
#[derive(Debug, Clone)]
pub struct PlayerBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self {
            name: "Alice Pauline".to_string(),
            phone: "94351253".to_string(),
            email: "alice@example.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            tags: vec!["friends".to_string()],
        }
    }

    /// Start from an existing player's values.
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            phone: player.phone().to_string(),
            email: player.email().to_string(),
            address: player.address().to_string(),
            tags: player.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Player {
        Player::new(
            Name::new(self.name).unwrap(),
            PhoneNumber::new(self.phone).unwrap(),
            EmailAddress::new(self.email).unwrap(),
            Address::new(self.address).unwrap(),
            self.tags.into_iter().map(|t| Tag::new(t).unwrap()),
        )
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn alice() -> Player {
    PlayerBuilder::new().build()
}

pub fn benson() -> Player {
    PlayerBuilder::new()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Player {
    PlayerBuilder::new()
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .tags(&[])
        .build()
}

pub fn daniel() -> Player {
    PlayerBuilder::new()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .tags(&["friends"])
        .build()
}

pub fn typical_players() -> Vec<Player> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn typical_book() -> SummonersBook {
    SummonersBook::from_players(typical_players()).unwrap()
}
