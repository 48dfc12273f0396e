//! HTTP middleware for axum.
//!
//! Cross-cutting layers applied to the whole router:
//!
//! - request ids (`x-request-id`, generated when absent and echoed back)
//! - request tracing
//! - request timeout
//! - CORS

use axum::http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Environment, ServerConfig};

/// CORS policy for the configured origins.
///
/// Without any configured origin, development allows everything and other
/// environments allow nothing cross-origin.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return match config.environment {
            Environment::Development => CorsLayer::permissive(),
            Environment::Staging | Environment::Production => CorsLayer::new(),
        };
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wraps `router` in the request-id, tracing, timeout and CORS layers.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(cors_layer(config)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    fn app(config: &ServerConfig) -> Router {
        with_middleware(Router::new().route("/", get(|| async { "ok" })), config)
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn unknown_origin_gets_no_cors_header() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn incoming_request_id_is_echoed() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
    }
}
