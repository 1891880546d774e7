//! Configuration management
//!
//! This module handles the few runtime settings of the tool,
//! currently just where local data (the favorites database) lives.

pub mod settings;

pub use settings::{Config, DATA_DIR_ENV, FAVORITES_DB_DIR, GLOBAL_CONFIG};
