//! Filter predicates for the player list.
//!
//! Each type here implements [`PlayerPredicate`](crate::registry::PlayerPredicate)
//! and can be handed straight to
//! [`PlayerService::update_filtered_players`](crate::services::PlayerService::update_filtered_players).

pub mod fuzzy_matcher;
pub mod keywords;

pub use crate::registry::show_all;
pub use fuzzy_matcher::{FuzzyNameMatcher, NameMatch, MAX_FUZZY_SCORE};
pub use keywords::{HasTag, NameContainsKeywords};
