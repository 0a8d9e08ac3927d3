//! The player registry.
//!
//! - [`UniquePlayerList`]: ordered list that rejects identity duplicates
//! - [`SummonersBook`]: the book-level wrapper the rest of the crate works with
//! - [`FilteredPlayers`]: the predicate-narrowed projection shown to users

pub mod book;
pub mod filtered;
pub mod unique_player_list;

pub use book::SummonersBook;
pub use filtered::{show_all, FilteredPlayers, FilteredView, PlayerPredicate};
pub use unique_player_list::UniquePlayerList;
