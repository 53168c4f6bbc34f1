//! API route definitions

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, state::AppState};

async fn handle_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": true,
            "message": "Not found. POST measurements to /predict or check /health for API status.",
        })),
    )
}

async fn handle_405() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": true,
            "message": "Method not allowed. Check the API documentation for supported methods.",
        })),
    )
}

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let app = Router::new()
        .route("/", get(handlers::read_root))
        .route("/predict", post(handlers::predict))
        .route("/predict/proba", post(handlers::predict_proba))
        .route("/model", get(handlers::get_model))
        .route("/health", get(handlers::health_check))
        .route("/system/status", get(handlers::get_system_status))
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405)
        .with_state(state);

    // CORS configured via CORS_ORIGIN env var (default: allow all for local-first)
    let cors = match std::env::var("CORS_ORIGIN") {
        Ok(origin) if !origin.is_empty() && origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .unwrap_or_else(|_| axum::http::HeaderValue::from_static("*")),
            )
            .allow_methods(Any)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    app.layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
