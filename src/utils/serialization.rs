// JSON helpers for everything we persist
use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};

/// Serialize data to JSON bytes
pub fn serialize<T: Serialize + ?Sized>(data: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(data)
        .map_err(|e| LookupError::Serialization(format!("Serialization failed: {e}")))
}

/// Deserialize data from JSON bytes
pub fn deserialize<T>(bytes: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(bytes)
        .map_err(|e| LookupError::Serialization(format!("Deserialization failed: {e}")))
}
