//! Operational endpoints outside `/api`.

use std::collections::BTreeMap;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// API index shown at `/`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiIndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET / - API index
pub async fn api_index() -> impl IntoResponse {
    let endpoints = BTreeMap::from([
        ("profiles", "/api/profiles"),
        ("areas", "/api/areas"),
        ("cities", "/api/cities"),
        ("technologies", "/api/technologies"),
        ("statistics", "/api/statistics"),
    ]);

    let response = ApiIndexResponse {
        message: "FuturoConecta API - Professional Network".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    };
    (StatusCode::OK, Json(response))
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            message: "API is running",
        }),
    )
}

pub fn system_routes() -> Router {
    Router::new()
        .route("/", get(api_index))
        .route("/health", get(health))
}
