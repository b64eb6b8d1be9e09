// Chart endpoints for the closed questions.
//
// GET /api/schedule         - Escala6x1 distribution (pie)
// GET /api/likert/{column}  - ordered Likert distribution (family | physical | mental)
// GET /api/dashboard        - every chart in one snapshot

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::models::LikertColumn;
use crate::output::Report;
use crate::survey::{build_dashboard, likert_chart, schedule_distribution};
use crate::web::{api_error, AppState};

/// GET /api/schedule - share of respondents on the 6x1 schedule.
pub async fn get_schedule(State(state): State<AppState>) -> Response {
    match schedule_distribution(state.store.as_ref()).await {
        Ok(counts) => Json(Report::new(counts)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error fetching schedule distribution");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// GET /api/likert/{column} - one impact question along the agreement scale.
pub async fn get_likert(State(state): State<AppState>, Path(column): Path<String>) -> Response {
    let column: LikertColumn = match column.parse() {
        Ok(c) => c,
        Err(e) => return api_error(StatusCode::NOT_FOUND, &e.to_string()),
    };

    match likert_chart(state.store.as_ref(), column).await {
        Ok(chart) => Json(Report::new(chart)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, column = column.as_str(), "DB error fetching likert chart");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// GET /api/dashboard - the whole dashboard.
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    match build_dashboard(state.store.as_ref(), &state.classifier).await {
        Ok(dashboard) => Json(Report::new(dashboard)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error building dashboard");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
