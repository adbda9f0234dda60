//! End-to-end tests for the bins database bootstrap.
//!
//! Each test runs the full `initialize` routine against a file in a
//! temporary directory, then inspects the result through its own rusqlite
//! connection, the same way any later consumer of the file would.

use poubelles_db::bin_store::{initialize, StorageError, SEED_BINS};
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

fn fetch_rows(db_path: &Path) -> Vec<(i64, String, i64, f64, f64)> {
    let conn = Connection::open(db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT id, nom, niveau, latitude, longitude FROM poubelles ORDER BY id")
        .unwrap();
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    rows
}

fn table_definition(db_path: &Path) -> String {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type='table' AND name='poubelles'",
        [],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn test_first_run_creates_and_seeds_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("database.db");

    initialize(&db_path).unwrap();

    assert!(db_path.exists());
    let expected = vec![
        (1, "Poubelle Paris A".to_string(), 30, 48.8566, 2.3522),
        (2, "Poubelle Paris B".to_string(), 80, 48.8584, 2.2945),
        (3, "Poubelle Paris C".to_string(), 100, 48.8606, 2.3376),
    ];
    assert_eq!(fetch_rows(&db_path), expected);
}

#[test]
fn test_second_run_appends_duplicate_seed_rows() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("database.db");

    initialize(&db_path).unwrap();
    initialize(&db_path).unwrap();

    let rows = fetch_rows(&db_path);
    assert_eq!(rows.len(), 2 * SEED_BINS.len());

    let ids: Vec<i64> = rows.iter().map(|row| row.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    // Rows 4..6 carry the same values as rows 1..3, only with new ids.
    for (first, second) in rows[..3].iter().zip(&rows[3..]) {
        assert_eq!(first.1, second.1);
        assert_eq!(first.2, second.2);
        assert_eq!(first.3, second.3);
        assert_eq!(first.4, second.4);
    }
}

#[test]
fn test_rerun_preserves_table_definition() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("database.db");

    initialize(&db_path).unwrap();
    let before = table_definition(&db_path);

    initialize(&db_path).unwrap();
    assert_eq!(table_definition(&db_path), before);
}

#[test]
fn test_bootstrap_fails_when_directory_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("no-such-dir").join("database.db");

    let result = initialize(&db_path);

    assert!(matches!(result, Err(StorageError::Open { .. })));
    assert!(!db_path.exists());
}

#[test]
fn test_null_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("database.db");
    initialize(&db_path).unwrap();

    let conn = Connection::open(&db_path).unwrap();
    let result = conn.execute("INSERT INTO poubelles (niveau) VALUES (5)", []);
    assert!(result.is_err());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM poubelles", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}
