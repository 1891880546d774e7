// Favorites live in a small sled database: one tree, one key, and the whole
// list serialized as a JSON array under that key. Every change rewrites the
// full list and flushes before returning.

use crate::config::GLOBAL_CONFIG;
use crate::core::WalletFavorite;
use crate::error::{LookupError, Result};
use crate::utils::{deserialize, serialize};
use log::{debug, info, warn};
use sled::{Db, Tree};
use std::path::{Path, PathBuf};

pub const WALLET_FAVORITES_KEY: &str = "walletFavorites";
const PREFERENCES_TREE: &str = "preferences";

pub struct FavoritesStore {
    db: Db,
    tree: Tree,
    db_path: PathBuf,
}

impl FavoritesStore {
    // Opens the store under the configured data directory
    pub fn open_default() -> Result<FavoritesStore> {
        Self::open(GLOBAL_CONFIG.favorites_db_path())
    }

    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<FavoritesStore> {
        let path = db_path.as_ref().to_path_buf();
        let db = sled::open(&path)
            .map_err(|e| LookupError::Database(format!("Failed to open database: {e}")))?;
        let tree = db.open_tree(PREFERENCES_TREE).map_err(|e| {
            LookupError::Database(format!("Failed to open preferences tree: {e}"))
        })?;
        debug!("Opened favorites store at {}", path.display());

        Ok(FavoritesStore {
            db,
            tree,
            db_path: path,
        })
    }

    pub fn get_db_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Stored favorites in insertion order.
    ///
    /// Missing, empty or unreadable data all read as an empty list.
    pub fn list(&self) -> Vec<WalletFavorite> {
        self.list_safe().unwrap_or_else(|e| {
            warn!("Could not load favorites, starting empty: {e}");
            vec![]
        })
    }

    fn list_safe(&self) -> Result<Vec<WalletFavorite>> {
        let data = self.tree.get(WALLET_FAVORITES_KEY)?;

        match data {
            Some(bytes) if !bytes.is_empty() => deserialize(bytes.as_ref()),
            _ => Ok(vec![]),
        }
    }

    /// Append `entry` unless its (id, network) is already present.
    ///
    /// The resulting list is persisted either way.
    pub fn add(
        &self,
        entry: &WalletFavorite,
        current: &[WalletFavorite],
    ) -> Result<Vec<WalletFavorite>> {
        let mut updated = current.to_vec();
        if Self::is_favorite(entry, current) {
            debug!("{} on {} is already a favorite", entry.id, entry.network);
        } else {
            updated.push(entry.clone());
            info!("Added favorite {} on {}", entry.id, entry.network);
        }
        self.persist(&updated)?;
        Ok(updated)
    }

    /// Drop every entry sharing `entry`'s (id, network), then persist.
    pub fn remove(
        &self,
        entry: &WalletFavorite,
        current: &[WalletFavorite],
    ) -> Result<Vec<WalletFavorite>> {
        let updated: Vec<WalletFavorite> = current
            .iter()
            .filter(|fav| !fav.same_entry(entry))
            .cloned()
            .collect();
        self.persist(&updated)?;
        info!("Removed favorite {} on {}", entry.id, entry.network);
        Ok(updated)
    }

    pub fn is_favorite(entry: &WalletFavorite, current: &[WalletFavorite]) -> bool {
        current.iter().any(|fav| fav.same_entry(entry))
    }

    /// Forget every favorite
    pub fn clear(&self) -> Result<()> {
        self.tree.remove(WALLET_FAVORITES_KEY)?;
        self.flush()?;
        info!("Cleared favorites");
        Ok(())
    }

    fn persist(&self, favorites: &[WalletFavorite]) -> Result<()> {
        let bytes = serialize(favorites)?;
        self.tree.insert(WALLET_FAVORITES_KEY, bytes)?;
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}
