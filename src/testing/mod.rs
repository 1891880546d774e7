//! Test utilities: fixture addresses and throwaway stores

pub mod test_utils;

pub use test_utils::*;
