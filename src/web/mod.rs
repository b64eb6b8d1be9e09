// Web server: Axum JSON backend for the survey dashboard.
//
// Every /api/* route reads the store on each request, so the charts
// always reflect the rows currently in the database. There is no
// authentication; the server binds to localhost unless told otherwise.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::SurveyStore;
use crate::topics::classifier::TopicClassifier;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SurveyStore>,
    pub classifier: Arc<TopicClassifier>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    store: Arc<dyn SurveyStore>,
    classifier: TopicClassifier,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState {
        store,
        classifier: Arc::new(classifier),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Escala 6x1 dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/status", get(handlers::status::get_status))
        .route("/api/schedule", get(handlers::charts::get_schedule))
        .route("/api/likert/{column}", get(handlers::charts::get_likert))
        .route("/api/dashboard", get(handlers::charts::get_dashboard))
        .route("/api/responses", get(handlers::responses::list_responses))
        .route("/api/impacts", get(handlers::impacts::get_impacts))
        .route("/api/topics", get(handlers::impacts::list_topics))
        .route("/api/classify", post(handlers::impacts::classify));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use rusqlite::Connection;
    use tower::ServiceExt;

    use crate::db::models::NewSurveyResponse;
    use crate::db::schema::create_tables;
    use crate::db::sqlite::SqliteStore;
    use crate::topics::lexicon::Lexicon;

    async fn test_state() -> AppState {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn, "Planilha1").unwrap();
        let store = SqliteStore::new(conn, "Planilha1").unwrap();

        let rows = [
            (Some("Sim"), Some("Concordo totalmente"), Some("Estou com ansiedade")),
            (Some("Sim"), Some("Concordo"), Some("Pouco tempo com meus filhos")),
            (Some("Não"), Some("Concordo totalmente"), None),
        ];
        for (escala, mental, impactos) in rows {
            store
                .insert_response(&NewSurveyResponse {
                    escala_6x1: escala.map(str::to_string),
                    impacto_saude_mental: mental.map(str::to_string),
                    impactos: impactos.map(str::to_string),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        AppState {
            store: Arc::new(store),
            classifier: Arc::new(TopicClassifier::new(Lexicon::builtin()).unwrap()),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_schedule_endpoint() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/schedule").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["label"], "Sim");
        assert_eq!(body["data"][0]["count"], 2);
        assert_eq!(body["data"][1]["label"], "Não");
    }

    #[tokio::test]
    async fn test_likert_endpoint_orders_scale() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/likert/mental").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Impacto na Saúde Mental");
        assert_eq!(body["data"]["counts"][0]["label"], "Concordo");
        assert_eq!(body["data"]["counts"][1]["label"], "Concordo totalmente");
        assert_eq!(body["data"]["counts"][1]["count"], 2);
    }

    #[tokio::test]
    async fn test_likert_unknown_column_is_404() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/likert/salary").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("salary"));
    }

    #[tokio::test]
    async fn test_impacts_endpoint() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/impacts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["responses_analyzed"], 2);
        let keys: Vec<&str> = body["data"]["topics"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["saude_mental", "familia"]);
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/classify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text":"Sem tempo para a família"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["hits"][0]["key"], "familia");
    }

    #[tokio::test]
    async fn test_classify_malformed_body_is_json_error() {
        let app = build_router(test_state().await);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/classify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_responses_endpoint() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/responses").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["id"], 1);
        assert_eq!(rows[0]["impactos"], "Estou com ansiedade");
        assert!(rows[2]["impactos"].is_null());
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = build_router(test_state().await);
        let (status, body) = get_json(app, "/api/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_responses"], 3);
        assert_eq!(body["text_responses"], 2);
        assert_eq!(body["topics"], 18);
    }
}
