//! Predicate-narrowed projection over the book's players.
//!
//! The projection is recomputed eagerly: whoever mutates the underlying
//! players calls [`FilteredPlayers::refresh`] before handing control back,
//! so a reader never sees a stale or half-updated view.

use crate::models::Player;
use std::fmt;
use std::ops::Index;

/// A test over a single player.
///
/// Any `Fn(&Player) -> bool` closure is a predicate; the named predicates in
/// [`matching`](crate::matching) implement it too.
pub trait PlayerPredicate {
    fn test(&self, player: &Player) -> bool;
}

impl<F> PlayerPredicate for F
where
    F: Fn(&Player) -> bool,
{
    fn test(&self, player: &Player) -> bool {
        self(player)
    }
}

/// The initial predicate: every player is shown.
pub fn show_all() -> impl PlayerPredicate {
    |_: &Player| true
}

/// Positions of the players that currently pass the active predicate.
pub struct FilteredPlayers {
    predicate: Box<dyn PlayerPredicate>,
    visible: Vec<usize>,
    source_len: usize,
}

impl FilteredPlayers {
    /// Projection over `players` with the show-all predicate.
    pub fn new(players: &[Player]) -> Self {
        let mut filtered = Self {
            predicate: Box::new(show_all()),
            visible: Vec::new(),
            source_len: 0,
        };
        filtered.refresh(players);
        filtered
    }

    /// Swap the predicate and recompute against `players`.
    pub fn set_predicate(&mut self, predicate: Box<dyn PlayerPredicate>, players: &[Player]) {
        self.predicate = predicate;
        self.refresh(players);
    }

    /// Recompute against the current `players`. Must follow every mutation.
    pub fn refresh(&mut self, players: &[Player]) {
        let visible = players
            .iter()
            .enumerate()
            .filter(|(_, p)| self.predicate.test(p))
            .map(|(i, _)| i)
            .collect();
        self.visible = visible;
        self.source_len = players.len();
    }

    /// Borrow the projection over the same `players` last passed to `refresh`.
    pub fn view<'a>(&'a self, players: &'a [Player]) -> FilteredView<'a> {
        debug_assert_eq!(
            players.len(),
            self.source_len,
            "filtered view read without a refresh after a mutation"
        );
        FilteredView {
            players,
            visible: &self.visible,
        }
    }
}

impl fmt::Debug for FilteredPlayers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredPlayers")
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Read-only, ordered sequence of the players passing the active predicate.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    players: &'a [Player],
    visible: &'a [usize],
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Player> {
        self.visible.get(index).map(|&i| &self.players[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Player> + 'a {
        let (players, visible) = (self.players, self.visible);
        visible.iter().map(move |&i| &players[i])
    }

    pub fn to_vec(&self) -> Vec<Player> {
        self.iter().cloned().collect()
    }
}

impl<'a> Index<usize> for FilteredView<'a> {
    type Output = Player;

    fn index(&self, index: usize) -> &Self::Output {
        &self.players[self.visible[index]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, EmailAddress, Name, PhoneNumber};

    fn player(name: &str) -> Player {
        Player::new(
            Name::new(name).unwrap(),
            PhoneNumber::new("12345678").unwrap(),
            EmailAddress::new("p@x.com").unwrap(),
            Address::new("1 St").unwrap(),
            Vec::new(),
        )
    }

    fn names(view: FilteredView<'_>) -> Vec<String> {
        view.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_initial_view_shows_all() {
        let players = vec![player("Alice"), player("Bob")];
        let filtered = FilteredPlayers::new(&players);
        assert_eq!(names(filtered.view(&players)), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_predicate_narrows_in_registry_order() {
        let players = vec![player("Bob"), player("Alice"), player("Alina")];
        let mut filtered = FilteredPlayers::new(&players);
        filtered.set_predicate(Box::new(|p: &Player| p.name().as_str().contains("Ali")), &players);

        let view = filtered.view(&players);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].name().as_str(), "Alice");
        assert_eq!(view.get(1).map(|p| p.name().as_str()), Some("Alina"));
        assert!(view.get(2).is_none());
    }

    #[test]
    fn test_refresh_keeps_predicate() {
        let mut players = vec![player("Alice"), player("Bob")];
        let mut filtered = FilteredPlayers::new(&players);
        filtered.set_predicate(Box::new(|p: &Player| p.name().as_str().contains("Ali")), &players);

        players.push(player("Alina"));
        filtered.refresh(&players);
        assert_eq!(names(filtered.view(&players)), vec!["Alice", "Alina"]);
    }

    #[test]
    fn test_empty_view() {
        let players = vec![player("Bob")];
        let mut filtered = FilteredPlayers::new(&players);
        filtered.set_predicate(Box::new(|_: &Player| false), &players);
        assert!(filtered.view(&players).is_empty());
    }
}
