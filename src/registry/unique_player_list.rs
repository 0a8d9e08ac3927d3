//! Ordered, identity-unique list of players.

use crate::error::{RegistryError, RegistryResult};
use crate::models::Player;
use std::collections::HashSet;
use tracing::debug;

/// A list of players in which no two entries are the same player.
///
/// Uniqueness goes through [`Player::is_same_player`], so `add` and
/// `set_player` reject identity collisions. Removal and the `set_player`
/// target lookup use full equality instead: only a player whose every field
/// matches is found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePlayerList {
    players: Vec<Player>,
}

impl UniquePlayerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a player with the same identity as `player` is in the list.
    pub fn contains(&self, player: &Player) -> bool {
        self.players.iter().any(|p| p.is_same_player(player))
    }

    /// Append a player.
    ///
    /// # Errors
    ///
    /// `RegistryError::DuplicatePlayer` if the identity is already present.
    pub fn add(&mut self, player: Player) -> RegistryResult<()> {
        if self.contains(&player) {
            return Err(duplicate(&player));
        }
        debug!(name = %player.name(), "Adding player");
        self.players.push(player);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// `edited` may keep the target's identity. It may not take the identity
    /// of any other registered player.
    ///
    /// # Errors
    ///
    /// - `RegistryError::PlayerNotFound` if no entry equals `target`
    /// - `RegistryError::DuplicatePlayer` if `edited` collides with another entry
    pub fn set_player(&mut self, target: &Player, edited: Player) -> RegistryResult<()> {
        let index = self
            .position(target)
            .ok_or_else(|| not_found(target))?;

        if !target.is_same_player(&edited) && self.contains(&edited) {
            return Err(duplicate(&edited));
        }

        debug!(target = %target.name(), name = %edited.name(), "Replacing player");
        self.players[index] = edited;
        Ok(())
    }

    /// Remove the entry equal to `player`.
    ///
    /// # Errors
    ///
    /// `RegistryError::PlayerNotFound` if no entry matches every field,
    /// even when a player with the same identity is present.
    pub fn remove(&mut self, player: &Player) -> RegistryResult<Player> {
        let index = self
            .position(player)
            .ok_or_else(|| not_found(player))?;
        debug!(name = %player.name(), "Removing player");
        Ok(self.players.remove(index))
    }

    /// Replace the whole contents with `players`, in the given order.
    ///
    /// # Errors
    ///
    /// `RegistryError::DuplicatePlayer` if two of `players` share an identity.
    /// The list is untouched on error.
    pub fn set_players(&mut self, players: Vec<Player>) -> RegistryResult<()> {
        if let Some(dup) = first_duplicate(&players) {
            return Err(duplicate(dup));
        }
        self.players = players;
        Ok(())
    }

    /// Read-only view of the players, in insertion order.
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position(&self, player: &Player) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}

impl<'a> IntoIterator for &'a UniquePlayerList {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// First player whose identity already appeared earlier in `players`.
///
/// Identity is the exact name string, so a set of names gives the same
/// answer as a pairwise `is_same_player` scan.
fn first_duplicate(players: &[Player]) -> Option<&Player> {
    let mut seen = HashSet::with_capacity(players.len());
    players.iter().find(|p| !seen.insert(p.name()))
}

fn duplicate(player: &Player) -> RegistryError {
    RegistryError::DuplicatePlayer {
        name: player.name().to_string(),
    }
}

fn not_found(player: &Player) -> RegistryError {
    RegistryError::PlayerNotFound {
        name: player.name().to_string(),
    }
}
