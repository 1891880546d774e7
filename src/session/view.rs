use crate::core::WalletFavorite;
use std::fmt;

pub const FAVORITES_SECTION: &str = "Favorites";
pub const SEARCH_RESULTS_SECTION: &str = "Search Results";
pub const INVALID_ADDRESS_TITLE: &str = "Invalid Wallet Address";

/// Something the user can do with a list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenInBrowser { title: String, url: String },
    AddToFavorites(WalletFavorite),
    RemoveFromFavorites(WalletFavorite),
    CopyAddress(String),
    ShowError(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenInBrowser { title, url } => write!(f, "{title}: {url}"),
            Action::AddToFavorites(_) => write!(f, "Add to Favorites"),
            Action::RemoveFromFavorites(_) => write!(f, "Remove from Favorites"),
            Action::CopyAddress(_) => write!(f, "Copy Address"),
            Action::ShowError(_) => write!(f, "Show Error"),
        }
    }
}

/// What applying an action produced, for the front end to present
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Open(String),
    Copy(String),
    FavoritesChanged(usize),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub title: String,
    pub icon: Option<String>,
    pub accessory: Option<String>,
    pub actions: Vec<Action>,
}

impl ListItem {
    pub fn primary_action(&self) -> Option<&Action> {
        self.actions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<ListItem>,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for item in &self.items {
            write!(f, "  {}", item.title)?;
            if let Some(accessory) = &item.accessory {
                write!(f, "  [{accessory}]")?;
            }
            writeln!(f)?;
            for action in &item.actions {
                writeln!(f, "    - {action}")?;
            }
        }
        Ok(())
    }
}
