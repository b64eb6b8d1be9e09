// Impact topic endpoints.
//
// GET  /api/impacts  - topic counts over every stored free-text answer
// POST /api/classify - topics matched by one ad-hoc answer
// GET  /api/topics   - the lexicon in use

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::output::Report;
use crate::survey::impact_summary;
use crate::topics::lexicon::TopicSpec;
use crate::web::{api_error, AppState};

#[derive(Deserialize)]
pub struct ClassifyRequest {
    pub text: Option<String>,
}

/// GET /api/impacts - aggregated topic counts, highest first.
pub async fn get_impacts(State(state): State<AppState>) -> Response {
    match impact_summary(state.store.as_ref(), &state.classifier).await {
        Ok(summary) => Json(Report::new(summary)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "DB error aggregating impacts");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// POST /api/classify - classify the `text` field of the request body.
/// A body that isn't valid JSON gets the usual `{ "error": ... }` reply.
pub async fn classify(
    State(state): State<AppState>,
    request: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return api_error(rejection.status(), &rejection.body_text()),
    };

    let result = state.classifier.classify(request.text.as_deref());
    Json(result).into_response()
}

/// GET /api/topics - key, name and keywords of every topic.
pub async fn list_topics(State(state): State<AppState>) -> impl IntoResponse {
    let topics: Vec<TopicSpec> = state
        .classifier
        .lexicon()
        .topics()
        .iter()
        .map(|t| t.to_spec())
        .collect();
    Json(topics)
}
