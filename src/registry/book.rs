//! The summoners book: the authoritative collection of players.

use crate::error::RegistryResult;
use crate::models::Player;
use crate::registry::UniquePlayerList;
use std::fmt;

/// Wraps all data at the book level. Duplicates are not allowed, by
/// [`Player::is_same_player`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummonersBook {
    players: UniquePlayerList,
}

impl SummonersBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book holding exactly `players`, in order.
    ///
    /// # Errors
    ///
    /// `RegistryError::DuplicatePlayer` if two players share an identity.
    pub fn from_players(players: Vec<Player>) -> RegistryResult<Self> {
        let mut book = Self::new();
        book.set_players(players)?;
        Ok(book)
    }

    /// Replace the contents with `players`. See [`UniquePlayerList::set_players`].
    pub fn set_players(&mut self, players: Vec<Player>) -> RegistryResult<()> {
        self.players.set_players(players)
    }

    /// Replace the contents with a copy of another book's players.
    pub fn reset_data(&mut self, new_data: &SummonersBook) {
        // The source book already upholds uniqueness.
        self.players = new_data.players.clone();
    }

    /// True if a player with the same identity is in the book.
    pub fn has_player(&self, player: &Player) -> bool {
        self.players.contains(player)
    }

    pub fn add_player(&mut self, player: Player) -> RegistryResult<()> {
        self.players.add(player)
    }

    pub fn set_player(&mut self, target: &Player, edited: Player) -> RegistryResult<()> {
        self.players.set_player(target, edited)
    }

    pub fn remove_player(&mut self, player: &Player) -> RegistryResult<Player> {
        self.players.remove(player)
    }

    /// Read-only, ordered view of every player.
    pub fn player_list(&self) -> &[Player] {
        self.players.as_slice()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl fmt::Display for SummonersBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SummonersBook({} players)", self.len())
    }
}
