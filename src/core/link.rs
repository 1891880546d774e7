use crate::core::chain::template_for;
use serde::{Deserialize, Serialize};

const UNKNOWN_NETWORK_TITLE: &str = "Unknown Network";
const UNKNOWN_NETWORK_EXPLORER: &str = "Unknown";
const UNKNOWN_NETWORK_ICON: &str = "unknown.png";

/// One classifier candidate: an address paired with one explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainLink {
    pub address: String,
    pub network: String,
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl ChainLink {
    /// Build the record stored when this candidate is favorited
    pub fn to_favorite(&self) -> WalletFavorite {
        WalletFavorite {
            id: self.address.clone(),
            name: self.address.clone(),
            network: self.network.clone(),
            icon: self.icon.clone(),
            url: self.url.clone(),
        }
    }
}

/// A pinned (address, network) pair. Also the shape of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletFavorite {
    pub id: String,
    pub name: String,
    pub network: String,
    pub icon: String,
    pub url: String,
}

/// Explorer details for displaying a stored favorite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub title: String,
    pub explorer: String,
    pub url: String,
    pub icon: String,
}

impl WalletFavorite {
    /// Favorites are keyed by (id, network); name, icon and url don't count.
    pub fn same_entry(&self, other: &WalletFavorite) -> bool {
        self.id == other.id && self.network == other.network
    }

    /// Look the stored network tag up in the chain table.
    ///
    /// Unknown tags fall back to the URL saved with the favorite.
    pub fn resolve_link(&self) -> ResolvedLink {
        match template_for(&self.network) {
            Some(template) => ResolvedLink {
                title: template.title.to_string(),
                explorer: template.explorer.to_string(),
                url: template.url_for(&self.id),
                icon: template.icon.to_string(),
            },
            None => {
                log::debug!(
                    "No explorer known for network '{}', using stored url",
                    self.network
                );
                ResolvedLink {
                    title: UNKNOWN_NETWORK_TITLE.to_string(),
                    explorer: UNKNOWN_NETWORK_EXPLORER.to_string(),
                    url: self.url.clone(),
                    icon: UNKNOWN_NETWORK_ICON.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str, network: &str) -> WalletFavorite {
        WalletFavorite {
            id: id.to_string(),
            name: id.to_string(),
            network: network.to_string(),
            icon: "icon.png".to_string(),
            url: "https://example.org".to_string(),
        }
    }

    #[test]
    fn test_same_entry_uses_id_and_network() {
        let a = favorite("0xabc", "eth");
        let mut b = favorite("0xabc", "eth");
        b.name = "renamed".to_string();
        b.url = "https://other.example".to_string();

        assert!(a.same_entry(&b));
        assert!(!a.same_entry(&favorite("0xabc", "arb")));
        assert!(!a.same_entry(&favorite("0xdef", "eth")));
    }

    #[test]
    fn test_resolve_known_network() {
        let link = favorite("0xabc", "arb").resolve_link();
        assert_eq!(link.title, "View on Arbiscan");
        assert_eq!(link.explorer, "Arbiscan");
        assert_eq!(link.url, "https://arbiscan.io/address/0xabc");
        assert_eq!(link.icon, "arbitrum.png");
    }

    #[test]
    fn test_resolve_unknown_network_keeps_stored_url() {
        let link = favorite("0xabc", "View on Etherscan").resolve_link();
        assert_eq!(link.title, "Unknown Network");
        assert_eq!(link.icon, "unknown.png");
        assert_eq!(link.url, "https://example.org");
    }

    #[test]
    fn test_to_favorite_copies_candidate() {
        let link = ChainLink {
            address: "TXYZ".to_string(),
            network: "tron".to_string(),
            title: "View on Tronscan".to_string(),
            url: "https://tronscan.org/#/address/TXYZ".to_string(),
            icon: "tron.png".to_string(),
        };
        let fav = link.to_favorite();
        assert_eq!(fav.id, "TXYZ");
        assert_eq!(fav.name, "TXYZ");
        assert_eq!(fav.network, "tron");
        assert_eq!(fav.url, link.url);
        assert_eq!(fav.icon, "tron.png");
    }

    #[test]
    fn test_favorite_json_field_names() {
        let json = serde_json::to_value(favorite("0xabc", "eth")).unwrap();
        for field in ["id", "name", "network", "icon", "url"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
