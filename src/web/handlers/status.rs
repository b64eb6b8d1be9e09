// GET /api/status - response counts and lexicon size.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::status::collect;
use crate::web::{api_error, AppState};

pub async fn get_status(State(state): State<AppState>) -> Response {
    match collect(state.store.as_ref()).await {
        Ok(stats) => Json(serde_json::json!({
            "total_responses": stats.total_responses,
            "text_responses": stats.text_responses,
            "topics": state.classifier.lexicon().len(),
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching status");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
