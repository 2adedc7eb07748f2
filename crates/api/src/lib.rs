//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/admin` and `/user`
//! - Token authentication middleware for the admin surface
//! - The `{code, msg, data}` error rendering

pub mod error;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod testing;

use axum::Router;
use sky_core::audit::AutoFill;
use sky_core::shop::ShopService;
use sky_core::storage::StorageService;
use sky_shared::JwtService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// JWT service for validating admin tokens.
    pub jwt_service: Arc<JwtService>,
    /// Object storage for uploaded files.
    pub storage: Arc<StorageService>,
    /// Shop status backed by the key-value store.
    pub shop: ShopService,
    /// Audit auto-fill for handlers that persist entities.
    pub auto_fill: AutoFill,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
