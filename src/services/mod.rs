//! Service layer for the summoners book.
//!
//! This module provides the command-facing API over the registry:
//! - Player lookups and mutations
//! - The filtered player view and its predicate

pub mod player_service;

pub use player_service::{ModelManager, PlayerService};
