//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`app_router`] assembles them with the operational routes and middleware.

pub mod middleware;
pub mod profile;
pub mod system;

// Re-export key types for convenience
pub use profile::{profile_routes, ProfileHandlers};

use axum::Router;

use crate::config::ServerConfig;

/// Full application router: `/`, `/health` and the profile API under `/api`.
pub fn app_router(handlers: ProfileHandlers, config: &ServerConfig) -> Router {
    let router = system::system_routes().nest("/api", profile_routes(handlers));
    middleware::with_middleware(router, config)
}
