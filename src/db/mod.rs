// Database layer: SQLite storage for survey responses.
//
// We use rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever ESCALA_DB_PATH points
// (defaults to ./base.sqlite).

pub mod models;
pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use traits::SurveyStore;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Open (or create) the database and create the survey table.
///
/// Called by `escala6x1 init` and by any command that writes rows.
pub fn initialize(db_path: &str, table: &str) -> Result<Connection> {
    // Create parent directories if needed
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    schema::create_tables(&conn, table)?;

    Ok(conn)
}

/// Open an existing database (fails if it doesn't exist yet or has no
/// survey table).
pub fn open(db_path: &str, table: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Database not found at {}. Run `escala6x1 init` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    if !schema::table_exists(&conn, table)? {
        anyhow::bail!(
            "Survey table {table:?} not found in {db_path}. \
             Set ESCALA_TABLE or run `escala6x1 init`."
        );
    }

    Ok(conn)
}

/// Open an existing database as a shared store.
pub fn open_sqlite(db_path: &str, table: &str) -> Result<Arc<dyn SurveyStore>> {
    let conn = open(db_path, table)?;
    Ok(Arc::new(sqlite::SqliteStore::new(conn, table)?))
}

/// Create the database if needed and return it as a shared store.
pub fn initialize_sqlite(db_path: &str, table: &str) -> Result<Arc<dyn SurveyStore>> {
    let conn = initialize(db_path, table)?;
    Ok(Arc::new(sqlite::SqliteStore::new(conn, table)?))
}
