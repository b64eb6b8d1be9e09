// SurveyStore trait: async interface over the survey database.
//
// Implementor: SqliteStore (wraps rusqlite). Methods are async so the
// synchronous rusqlite backend can sit behind a Mutex and be shared by the
// web handlers. The trait mirrors the free functions in queries.rs.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{NewSurveyResponse, SurveyColumn, SurveyResponse};

#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    /// Insert one response and return its id.
    async fn insert_response(&self, response: &NewSurveyResponse) -> Result<i64>;

    /// Load every response in insertion order.
    async fn get_responses(&self) -> Result<Vec<SurveyResponse>>;

    /// Load one column for every response, NULLs included.
    async fn get_column_values(&self, column: SurveyColumn) -> Result<Vec<Option<String>>>;

    /// Distinct non-null values of a column, in first-seen order.
    async fn get_distinct_values(&self, column: SurveyColumn) -> Result<Vec<String>>;

    /// Total number of responses.
    async fn count_responses(&self) -> Result<i64>;
}
