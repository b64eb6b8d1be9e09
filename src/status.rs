// System status display: database file and contents, plus the active lexicon.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::db::models::SurveyColumn;
use crate::db::SurveyStore;
use crate::topics::lexicon::Lexicon;

/// Store statistics shown by `escala6x1 status` and `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_responses: i64,
    /// Rows with a non-blank free-text impacts answer
    pub text_responses: usize,
    pub tables: i64,
}

pub async fn collect(store: &dyn SurveyStore) -> Result<StoreStats> {
    let total_responses = store.count_responses().await?;
    let text_responses = store
        .get_column_values(SurveyColumn::Impactos)
        .await?
        .iter()
        .flatten()
        .filter(|t| !t.trim().is_empty())
        .count();
    let tables = store.table_count().await?;

    Ok(StoreStats {
        total_responses,
        text_responses,
        tables,
    })
}

/// Open the store for `status`. A missing database file is `Ok(None)`; any
/// other failure (no survey table, unreadable file) is returned as an error.
pub fn open_store(db_path: &str, table: &str) -> Result<Option<Arc<dyn SurveyStore>>> {
    if !Path::new(db_path).exists() {
        return Ok(None);
    }
    crate::db::open_sqlite(db_path, table).map(Some)
}

/// Display system status to the terminal.
pub async fn show(
    store: Option<&dyn SurveyStore>,
    db_path: &str,
    table: &str,
    lexicon: &Lexicon,
) -> Result<()> {
    let store = match store {
        Some(store) if Path::new(db_path).exists() => store,
        _ => {
            println!("Database: not initialized");
            println!("\nRun `escala6x1 init` to set up the database.");
            return Ok(());
        }
    };

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);
    println!("Survey table: {table}");

    let stats = collect(store).await?;
    println!("Responses: {} total", stats.total_responses);
    if stats.text_responses == 0 {
        println!("Free-text impacts: none yet");
    } else {
        println!("Free-text impacts: {} answers", stats.text_responses);
    }

    let keyword_count: usize = lexicon.topics().iter().map(|t| t.keywords().len()).sum();
    println!(
        "Lexicon: {} topics, {} keywords",
        lexicon.len(),
        keyword_count
    );

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
