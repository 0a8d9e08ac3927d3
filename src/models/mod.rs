//! Data models for the summoners book.
//!
//! A [`Player`] aggregates the validated value objects from
//! [`domain`](crate::domain); [`PlayerChanges`] describes a partial edit.

pub mod player;
pub mod player_changes;

pub use player::Player;
pub use player_changes::PlayerChanges;
