//! Utility functions and helpers
//!
//! This module contains the serialization helpers used by the store.

pub mod serialization;

pub use serialization::{deserialize, serialize};
