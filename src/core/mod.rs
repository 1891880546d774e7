//! Address classification and explorer links
//!
//! This module holds the static explorer table, the regex-based address
//! classifier, and the record types that flow between them and the store.

pub mod chain;
pub mod classifier;
pub mod link;

pub use chain::{template_for, templates_for, ChainLinkTemplate, CHAIN_LINKS};
pub use classifier::{classify, detect_formats, AddressFormat};
pub use link::{ChainLink, ResolvedLink, WalletFavorite};
