//! Test utilities for classifier and favorites testing

use crate::core::WalletFavorite;
use crate::error::Result;
use crate::storage::FavoritesStore;
use tempfile::TempDir;

/// 40 hex digits, mixed case
pub const DEAD_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";
/// Base58, 34 chars: matches both the Tron and Solana patterns
pub const TRON_ADDRESS: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
pub const SOLANA_ADDRESS: &str = "So11111111111111111111111111111111111111112";
/// Short enough (27 chars) to stay out of the Solana range
pub const BITCOIN_LEGACY_ADDRESS: &str = "1111111111111111111114oLvT2";
pub const BITCOIN_BECH32_ADDRESS: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";

/// Create a temporary directory for testing
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Create a favorites store in a temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn create_test_store() -> Result<(FavoritesStore, TempDir)> {
    let temp_dir = create_temp_dir()?;
    let store = FavoritesStore::open(temp_dir.path().join("favorites"))?;
    Ok((store, temp_dir))
}

pub fn sample_favorite(address: &str, network: &str) -> WalletFavorite {
    WalletFavorite {
        id: address.to_string(),
        name: address.to_string(),
        network: network.to_string(),
        icon: format!("{network}.png"),
        url: format!("https://explorer.invalid/{network}/{address}"),
    }
}
