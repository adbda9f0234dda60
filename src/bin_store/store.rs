//! Bin store implementation and the one-shot bootstrap routine.

use super::models::NewBin;
use super::schema::{BINS_COLUMNS, BINS_TABLE, CREATE_BINS_TABLE, SEED_BINS};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while bootstrapping the bins database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot open database at {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("schema setup failed: {0}")]
    Schema(String),

    #[error("insert failed: {0}")]
    Insert(#[source] rusqlite::Error),

    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),
}

/// Store for bin records, owning a single connection.
///
/// The bootstrap is single threaded and runs to completion, so the
/// connection is held directly; methods that need a transaction take
/// `&mut self`. Dropping the store closes the connection.
pub struct SqliteBinStore {
    conn: Connection,
}

impl SqliteBinStore {
    /// Open the database at `db_path`, creating the file if it does not
    /// exist, and ensure the bins table is present.
    ///
    /// A pre-existing `poubelles` table must match the expected column
    /// definition; anything else in the file is a schema error rather than
    /// something to silently write into.
    pub fn new<T: AsRef<Path>>(db_path: T) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path).map_err(|source| StorageError::Open {
            path: db_path.to_path_buf(),
            source,
        })?;

        conn.execute_batch(CREATE_BINS_TABLE)
            .map_err(|e| StorageError::Schema(e.to_string()))?;
        Self::validate_schema(&conn)?;

        Ok(SqliteBinStore { conn })
    }

    /// Verify the bins table columns against the expected definition.
    fn validate_schema(conn: &Connection) -> Result<(), StorageError> {
        // PRAGMA table_info columns: cid, name, type, notnull, dflt_value, pk
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({});", BINS_TABLE))
            .map_err(|e| StorageError::Schema(e.to_string()))?;
        let actual: Vec<(String, String, bool, Option<String>, bool)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get(1)?,
                    row.get(2)?,
                    row.get::<_, i32>(3)? == 1,
                    row.get(4)?,
                    row.get::<_, i32>(5)? == 1,
                ))
            })
            .map_err(|e| StorageError::Schema(e.to_string()))?
            .collect::<Result<_, _>>()
            .map_err(|e| StorageError::Schema(e.to_string()))?;

        if actual.len() != BINS_COLUMNS.len() {
            return Err(StorageError::Schema(format!(
                "table {} has {} columns, expected {}",
                BINS_TABLE,
                actual.len(),
                BINS_COLUMNS.len()
            )));
        }

        for ((name, sql_type, non_null, default_value, is_primary_key), expected) in
            actual.iter().zip(BINS_COLUMNS)
        {
            let matches = name == expected.name
                && sql_type == expected.sql_type
                && *non_null == expected.non_null
                && default_value.as_deref() == expected.default_value
                && *is_primary_key == expected.is_primary_key;
            if !matches {
                return Err(StorageError::Schema(format!(
                    "table {} column {} does not match the expected definition",
                    BINS_TABLE, name
                )));
            }
        }

        Ok(())
    }

    /// Insert a single bin, returning the id assigned by the store.
    pub fn insert_bin(&self, bin: &NewBin) -> Result<i64, StorageError> {
        insert_bin_into(&self.conn, bin)
    }

    /// Insert the three seed bins in one transaction.
    ///
    /// Runs unconditionally: every call appends a fresh copy of the seed
    /// rows, so repeated bootstraps accumulate duplicates.
    pub fn insert_seed_bins(&mut self) -> Result<(), StorageError> {
        let tx = self.conn.transaction().map_err(StorageError::Insert)?;
        for seed in SEED_BINS {
            insert_bin_into(&tx, &NewBin::from(seed))?;
        }
        tx.commit().map_err(StorageError::Insert)?;
        Ok(())
    }

    /// Number of rows currently in the bins table.
    pub fn count_bins(&self) -> Result<i64, StorageError> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", BINS_TABLE), [], |row| {
                row.get(0)
            })
            .map_err(StorageError::Query)
    }
}

fn insert_bin_into(conn: &Connection, bin: &NewBin) -> Result<i64, StorageError> {
    let result = match bin.level {
        Some(level) => conn.execute(
            "INSERT INTO poubelles (nom, niveau, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
            params![bin.name, level, bin.latitude, bin.longitude],
        ),
        // Omitting niveau lets the column default of 0 apply.
        None => conn.execute(
            "INSERT INTO poubelles (nom, latitude, longitude) VALUES (?1, ?2, ?3)",
            params![bin.name, bin.latitude, bin.longitude],
        ),
    };
    result.map_err(StorageError::Insert)?;

    Ok(conn.last_insert_rowid())
}

/// One-shot bootstrap: open or create the database at `db_path`, make sure
/// the `poubelles` table exists, and append the three seed rows in a single
/// committed transaction.
///
/// Table creation is idempotent but seeding is not: every run inserts a
/// fresh copy of the seed rows, so repeated runs accumulate duplicates.
/// The connection is released when the store is dropped, on success and
/// error paths alike.
pub fn initialize<P: AsRef<Path>>(db_path: P) -> Result<(), StorageError> {
    let mut store = SqliteBinStore::new(db_path.as_ref())?;
    store.insert_seed_bins()?;
    info!(
        "Seeded {} bins into {:?}, table now holds {} rows",
        SEED_BINS.len(),
        db_path.as_ref(),
        store.count_bins()?
    );
    Ok(())
}
