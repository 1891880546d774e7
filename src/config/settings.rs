use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_DATA_DIR: &str = "data";

/// Sub-directory of the data dir holding the favorites database
pub const FAVORITES_DB_DIR: &str = "favorites";

pub const DATA_DIR_ENV: &str = "WALLET_EXPLORER_DATA_DIR";

const DATA_DIR_KEY: &str = "DATA_DIR";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => dir,
            _ => default_data_dir(),
        };

        let mut map = HashMap::new();
        map.insert(String::from(DATA_DIR_KEY), data_dir);

        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_data_dir(&self) -> PathBuf {
        match self.inner.read() {
            Ok(inner) => inner
                .get(DATA_DIR_KEY)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default_data_dir())),
            Err(_) => {
                log::error!("Failed to acquire read lock on config, using default data dir");
                PathBuf::from(default_data_dir())
            }
        }
    }

    pub fn set_data_dir(&self, dir: PathBuf) {
        match self.inner.write() {
            Ok(mut inner) => {
                inner.insert(
                    String::from(DATA_DIR_KEY),
                    dir.to_string_lossy().to_string(),
                );
            }
            Err(_) => {
                log::error!("Failed to acquire write lock on config");
            }
        }
    }

    /// Location of the favorites database (e.g. "./data/favorites")
    pub fn favorites_db_path(&self) -> PathBuf {
        self.get_data_dir().join(FAVORITES_DB_DIR)
    }
}

fn default_data_dir() -> String {
    match env::current_dir() {
        Ok(dir) => dir.join(DEFAULT_DATA_DIR).to_string_lossy().to_string(),
        Err(_) => String::from(DEFAULT_DATA_DIR),
    }
}
