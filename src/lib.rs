//! # Wallet Explorer - Address Lookup and Favorites
//!
//! Paste a wallet address, get the block-explorer pages for it.
//! When I come back to this code, here's what I need to remember:
//!
//! ## What It Does
//! - **Classification**: regex checks for EVM, Bitcoin, Solana and Tron formats
//! - **Explorer Links**: one static table of explorers, 16 of them for EVM chains
//! - **Favorites**: (address, network) pairs kept in a local sled database
//! - **No Network Calls**: only URLs are built, nothing is fetched
//!
//! ## How the Code Is Organized
//! - `core/`: explorer table, classifier, and the link/favorite records
//! - `storage/`: the favorites store (one key, JSON array)
//! - `session/`: search text, candidates and favorites for one session, plus the view
//! - `config/`: where data lives
//! - `utils/`: JSON helpers
//! - `cli/`: command-line interface
//!
//! ## Things to Keep in Mind
//! - The same table drives candidate generation and favorite display
//! - Favorites are unique per (id, network), never per address alone
//! - The patterns are shape checks only; no checksums are verified

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    classify, detect_formats, template_for, AddressFormat, ChainLink, ChainLinkTemplate,
    ResolvedLink, WalletFavorite, CHAIN_LINKS,
};
pub use error::{LookupError, Result};
pub use session::{Action, ActionOutcome, ListItem, Section, Session};
pub use storage::{FavoritesStore, WALLET_FAVORITES_KEY};
