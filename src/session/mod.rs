//! Interactive session state
//!
//! A `Session` owns everything one lookup session works with: the current
//! search text, the candidates computed from it, and the favorites list
//! loaded from the store. Favorites mutations go through the store and the
//! session adopts whatever sequence the store returns.

pub mod view;

pub use view::{
    Action, ActionOutcome, ListItem, Section, FAVORITES_SECTION, INVALID_ADDRESS_TITLE,
    SEARCH_RESULTS_SECTION,
};

use crate::core::{classify, ChainLink, WalletFavorite};
use crate::error::{LookupError, Result};
use crate::storage::FavoritesStore;

pub struct Session {
    store: FavoritesStore,
    search_text: String,
    favorites: Vec<WalletFavorite>,
    candidates: Vec<ChainLink>,
}

impl Session {
    pub fn new(store: FavoritesStore) -> Session {
        let favorites = store.list();
        log::debug!("Session started with {} favorite(s)", favorites.len());
        Session {
            store,
            search_text: String::new(),
            favorites,
            candidates: vec![],
        }
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.candidates = classify(text);
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn favorites(&self) -> &[WalletFavorite] {
        &self.favorites
    }

    pub fn candidates(&self) -> &[ChainLink] {
        &self.candidates
    }

    pub fn candidate(&self, network: &str) -> Option<&ChainLink> {
        self.candidates.iter().find(|link| link.network == network)
    }

    /// The candidate for `network`, or why there isn't one
    pub fn require_candidate(&self, network: &str) -> Result<ChainLink> {
        if self.candidates.is_empty() {
            return Err(LookupError::InvalidAddress(self.search_text.clone()));
        }
        self.candidate(network)
            .cloned()
            .ok_or_else(|| LookupError::UnknownNetwork {
                address: self.search_text.clone(),
                network: network.to_string(),
            })
    }

    pub fn find_favorite(&self, address: &str, network: &str) -> Option<&WalletFavorite> {
        self.favorites
            .iter()
            .find(|fav| fav.id == address && fav.network == network)
    }

    pub fn is_favorite(&self, entry: &WalletFavorite) -> bool {
        FavoritesStore::is_favorite(entry, &self.favorites)
    }

    // On a failed write the in-memory list is left as it was.
    pub fn add_favorite(&mut self, entry: &WalletFavorite) -> Result<()> {
        self.favorites = self.store.add(entry, &self.favorites)?;
        Ok(())
    }

    pub fn remove_favorite(&mut self, entry: &WalletFavorite) -> Result<()> {
        self.favorites = self.store.remove(entry, &self.favorites)?;
        Ok(())
    }

    /// Flip membership of a candidate; returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, link: &ChainLink) -> Result<bool> {
        let entry = link.to_favorite();
        if self.is_favorite(&entry) {
            self.remove_favorite(&entry)?;
            Ok(false)
        } else {
            self.add_favorite(&entry)?;
            Ok(true)
        }
    }

    pub fn clear_favorites(&mut self) -> Result<()> {
        self.store.clear()?;
        self.favorites.clear();
        Ok(())
    }

    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome> {
        match action {
            Action::OpenInBrowser { url, .. } => Ok(ActionOutcome::Open(url.clone())),
            Action::CopyAddress(address) => Ok(ActionOutcome::Copy(address.clone())),
            Action::AddToFavorites(entry) => {
                self.add_favorite(entry)?;
                Ok(ActionOutcome::FavoritesChanged(self.favorites.len()))
            }
            Action::RemoveFromFavorites(entry) => {
                self.remove_favorite(entry)?;
                Ok(ActionOutcome::FavoritesChanged(self.favorites.len()))
            }
            Action::ShowError(message) => Ok(ActionOutcome::Failure(message.clone())),
        }
    }

    /// Sections to display for the current state
    pub fn view(&self) -> Vec<Section> {
        let mut sections = vec![];
        if self.search_text.is_empty() && !self.favorites.is_empty() {
            sections.push(self.favorites_section());
        }
        sections.push(self.search_results_section());
        sections
    }

    pub fn favorites_section(&self) -> Section {
        let items = self
            .favorites
            .iter()
            .map(|favorite| {
                let link = favorite.resolve_link();
                ListItem {
                    title: favorite.name.clone(),
                    icon: Some(link.icon),
                    accessory: Some(format!("View on {}", link.explorer)),
                    actions: vec![
                        Action::OpenInBrowser {
                            title: link.title,
                            url: link.url,
                        },
                        Action::RemoveFromFavorites(favorite.clone()),
                        Action::CopyAddress(favorite.id.clone()),
                    ],
                }
            })
            .collect();

        Section {
            title: FAVORITES_SECTION.to_string(),
            items,
        }
    }

    pub fn search_results_section(&self) -> Section {
        let items = if self.search_text.is_empty() {
            vec![]
        } else if self.candidates.is_empty() {
            vec![ListItem {
                title: INVALID_ADDRESS_TITLE.to_string(),
                icon: None,
                accessory: None,
                actions: vec![Action::ShowError(INVALID_ADDRESS_TITLE.to_string())],
            }]
        } else {
            self.candidates
                .iter()
                .map(|link| self.candidate_item(link))
                .collect()
        };

        Section {
            title: SEARCH_RESULTS_SECTION.to_string(),
            items,
        }
    }

    fn candidate_item(&self, link: &ChainLink) -> ListItem {
        let entry = link.to_favorite();
        let toggle = if self.is_favorite(&entry) {
            Action::RemoveFromFavorites(entry)
        } else {
            Action::AddToFavorites(entry)
        };

        ListItem {
            title: self.search_text.clone(),
            icon: Some(link.icon.clone()),
            accessory: Some(link.network.clone()),
            actions: vec![
                Action::OpenInBrowser {
                    title: link.title.clone(),
                    url: link.url.clone(),
                },
                toggle,
                Action::CopyAddress(self.search_text.clone()),
            ],
        }
    }
}
