//! Error handling for wallet lookups
//!
//! This module provides the error types shared by the classifier,
//! the favorites store and the command-line front end.

use std::fmt;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, LookupError>;

/// Error types for lookup and favorites operations
#[derive(Debug, Clone)]
pub enum LookupError {
    /// Database-related errors
    Database(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// File I/O errors
    Io(String),
    /// Address matched none of the supported chain formats
    InvalidAddress(String),
    /// Network tag is not offered for the given address
    UnknownNetwork { address: String, network: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Database(msg) => write!(f, "Database error: {msg}"),
            LookupError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LookupError::Io(msg) => write!(f, "I/O error: {msg}"),
            LookupError::InvalidAddress(addr) => write!(f, "Invalid address: {addr}"),
            LookupError::UnknownNetwork { address, network } => {
                write!(f, "Network '{network}' is not available for address {address}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

impl From<std::io::Error> for LookupError {
    fn from(err: std::io::Error) -> Self {
        LookupError::Io(err.to_string())
    }
}

impl From<sled::Error> for LookupError {
    fn from(err: sled::Error) -> Self {
        LookupError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Serialization(err.to_string())
    }
}
