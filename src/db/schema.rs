// Database schema: survey table creation.
//
// The survey table mirrors the spreadsheet import: one TEXT column per
// question, rows identified by SQLite's implicit rowid. A `schema_version`
// table records which schema revision created the file.
//
// The table name comes from configuration, so it is validated before it is
// spliced into SQL.

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::models::SurveyColumn;

/// Current schema revision.
pub const SCHEMA_VERSION: i64 = 1;

/// Reject table names that aren't plain identifiers.
pub fn validate_table_name(table: &str) -> Result<()> {
    if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        anyhow::bail!(
            "Invalid survey table name {table:?}: use only letters, digits and underscores"
        );
    }
    Ok(())
}

/// Create the survey table and schema_version if they don't exist yet.
///
/// Idempotent. An existing survey table (e.g. one written by a spreadsheet
/// import) is left untouched.
pub fn create_tables(conn: &Connection, table: &str) -> Result<()> {
    validate_table_name(table)?;

    let columns: Vec<String> = SurveyColumn::ALL
        .iter()
        .map(|c| format!("\"{}\" TEXT", c.as_str()))
        .collect();

    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS \"{table}\" (
            {}
        );
        ",
        columns.join(",\n            ")
    ))
    .context("Failed to create database tables")?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Whether `table` exists.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists)
}
