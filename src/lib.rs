//! Poubelles DB
//!
//! Bootstrap library for the smart waste-bins SQLite database. It exposes
//! the internal modules so integration tests can run the bootstrap against
//! temporary files.

pub mod bin_store;

// Re-export commonly used types for convenience
pub use bin_store::{initialize, NewBin, SqliteBinStore, StorageError};
