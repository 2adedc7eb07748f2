//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod common;
pub mod health;
pub mod shop;

/// Creates the API router.
///
/// Everything under `/admin` requires a valid token; `/user` and `/health`
/// are public.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .merge(common::routes(state.storage.config().max_file_size))
        .merge(shop::admin_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(shop::user_routes())
        .merge(admin_routes)
}
