// SqliteStore: rusqlite backend implementing the SurveyStore trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{NewSurveyResponse, SurveyColumn, SurveyResponse};
use super::schema::validate_table_name;
use super::traits::SurveyStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
    table: String,
}

impl SqliteStore {
    /// Wrap an already-opened rusqlite Connection reading from `table`.
    pub fn new(conn: Connection, table: &str) -> Result<Self> {
        validate_table_name(table)?;
        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
        })
    }
}

#[async_trait]
impl SurveyStore for SqliteStore {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_response(&self, response: &NewSurveyResponse) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_response(&conn, &self.table, response)
    }

    async fn get_responses(&self) -> Result<Vec<SurveyResponse>> {
        let conn = self.conn.lock().await;
        super::queries::get_responses(&conn, &self.table)
    }

    async fn get_column_values(&self, column: SurveyColumn) -> Result<Vec<Option<String>>> {
        let conn = self.conn.lock().await;
        super::queries::get_column_values(&conn, &self.table, column)
    }

    async fn get_distinct_values(&self, column: SurveyColumn) -> Result<Vec<String>> {
        let conn = self.conn.lock().await;
        super::queries::get_distinct_values(&conn, &self.table, column)
    }

    async fn count_responses(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::count_responses(&conn, &self.table)
    }
}
