//! SQLite persistence for waste-bin records.
//!
//! This module holds everything the bootstrap needs: the `poubelles` table
//! schema, the hard-coded seed rows, and the store that creates and fills
//! the database file.

pub mod models;
pub mod schema;
pub mod store;

pub use models::{NewBin, SeedBin};
pub use schema::SEED_BINS;
pub use store::{initialize, SqliteBinStore, StorageError};
