// GET /api/responses - every stored survey row, in insertion order.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::output::Report;
use crate::web::{api_error, AppState};

pub async fn list_responses(State(state): State<AppState>) -> Response {
    match state.store.get_responses().await {
        Ok(responses) => Json(Report::new(responses)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error listing responses");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
