//! Player service layer.
//!
//! The only entry points command handlers and the display layer use to reach
//! the book and its filtered view.

use crate::error::RegistryResult;
use crate::models::{Player, PlayerChanges};
use crate::registry::{FilteredPlayers, FilteredView, PlayerPredicate, SummonersBook};
use tracing::debug;

/// Player service trait for command-layer operations.
pub trait PlayerService {
    /// The whole book, read-only.
    fn summoners_book(&self) -> &SummonersBook;

    /// Replace the book's contents with a copy of `new_data`.
    fn set_summoners_book(&mut self, new_data: &SummonersBook);

    /// True if a player with the same identity is in the book.
    fn has_player(&self, player: &Player) -> bool;

    /// Add a player. Fails if the identity is already taken.
    fn add_player(&mut self, player: Player) -> RegistryResult<()>;

    /// Remove the player equal to `target` in every field.
    fn delete_player(&mut self, target: &Player) -> RegistryResult<Player>;

    /// Replace `target` with `edited` in place.
    fn set_player(&mut self, target: &Player, edited: Player) -> RegistryResult<()>;

    /// Players passing the current filter, in book order.
    fn filtered_players(&self) -> FilteredView<'_>;

    /// Install a new filter.
    fn update_filtered_players(&mut self, predicate: Box<dyn PlayerPredicate>);

    /// Apply `changes` to `target` and store the result.
    ///
    /// Returns the edited player.
    fn edit_player(&mut self, target: &Player, changes: &PlayerChanges) -> RegistryResult<Player> {
        let edited = changes.apply_to(target);
        self.set_player(target, edited.clone())?;
        Ok(edited)
    }
}

/// Default implementation of PlayerService.
///
/// Owns the book and the filtered projection over it. Every mutation and
/// every filter change recomputes the projection before returning.
#[derive(Debug)]
pub struct ModelManager {
    book: SummonersBook,
    filtered: FilteredPlayers,
}

impl ModelManager {
    /// Create a manager over a copy of `book`, showing every player.
    pub fn new(book: &SummonersBook) -> Self {
        debug!(players = book.len(), "Initializing model");
        let book = book.clone();
        let filtered = FilteredPlayers::new(book.player_list());
        Self { book, filtered }
    }

    fn refresh(&mut self) {
        self.filtered.refresh(self.book.player_list());
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(&SummonersBook::new())
    }
}

impl PlayerService for ModelManager {
    fn summoners_book(&self) -> &SummonersBook {
        &self.book
    }

    fn set_summoners_book(&mut self, new_data: &SummonersBook) {
        self.book.reset_data(new_data);
        self.refresh();
    }

    fn has_player(&self, player: &Player) -> bool {
        self.book.has_player(player)
    }

    fn add_player(&mut self, player: Player) -> RegistryResult<()> {
        self.book.add_player(player)?;
        self.refresh();
        Ok(())
    }

    fn delete_player(&mut self, target: &Player) -> RegistryResult<Player> {
        let removed = self.book.remove_player(target)?;
        self.refresh();
        Ok(removed)
    }

    fn set_player(&mut self, target: &Player, edited: Player) -> RegistryResult<()> {
        self.book.set_player(target, edited)?;
        self.refresh();
        Ok(())
    }

    fn filtered_players(&self) -> FilteredView<'_> {
        self.filtered.view(self.book.player_list())
    }

    fn update_filtered_players(&mut self, predicate: Box<dyn PlayerPredicate>) {
        self.filtered.set_predicate(predicate, self.book.player_list());
    }
}
