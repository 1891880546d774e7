//! Local persistence
//!
//! This module keeps the user's favorites in an embedded key-value store.

pub mod favorites;

pub use favorites::{FavoritesStore, WALLET_FAVORITES_KEY};
