//! Schema and seed definitions for the bins database.
//!
//! SQL identifiers keep the French names of the persisted layout
//! (`poubelles`, `nom`, `niveau`); the Rust side uses English.

use super::models::SeedBin;

/// Name of the bins table.
pub const BINS_TABLE: &str = "poubelles";

/// Idempotent creation statement for the bins table. Re-running it against
/// an existing database is a no-op.
pub const CREATE_BINS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS poubelles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nom TEXT NOT NULL,
        niveau INTEGER DEFAULT 0,
        latitude REAL,
        longitude REAL
    );
"#;

/// A column of the bins table as it should appear in `PRAGMA table_info`.
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub non_null: bool,
    pub default_value: Option<&'static str>,
    pub is_primary_key: bool,
}

/// Expected column layout, used to validate pre-existing database files.
pub const BINS_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "id",
        sql_type: "INTEGER",
        non_null: false,
        default_value: None,
        is_primary_key: true,
    },
    ColumnDef {
        name: "nom",
        sql_type: "TEXT",
        non_null: true,
        default_value: None,
        is_primary_key: false,
    },
    ColumnDef {
        name: "niveau",
        sql_type: "INTEGER",
        non_null: false,
        default_value: Some("0"),
        is_primary_key: false,
    },
    ColumnDef {
        name: "latitude",
        sql_type: "REAL",
        non_null: false,
        default_value: None,
        is_primary_key: false,
    },
    ColumnDef {
        name: "longitude",
        sql_type: "REAL",
        non_null: false,
        default_value: None,
        is_primary_key: false,
    },
];

/// The three bins every bootstrap run inserts, in insertion order.
pub const SEED_BINS: &[SeedBin] = &[
    SeedBin {
        name: "Poubelle Paris A",
        level: 30,
        latitude: 48.8566,
        longitude: 2.3522,
    },
    SeedBin {
        name: "Poubelle Paris B",
        level: 80,
        latitude: 48.8584,
        longitude: 2.2945,
    },
    SeedBin {
        name: "Poubelle Paris C",
        level: 100,
        latitude: 48.8606,
        longitude: 2.3376,
    },
];
