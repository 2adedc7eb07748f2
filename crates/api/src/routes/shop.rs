//! Shop status routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::{get, put},
};

use crate::{AppState, error::ApiError};
use sky_core::shop::ShopStatus;
use sky_shared::ApiResult;

/// Admin routes. Mounted behind the auth middleware.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/shop/status", get(get_status))
        .route("/admin/shop/{status}", put(set_status))
}

/// Client-facing routes, no token required.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/shop/status", get(get_status))
}

/// PUT `/admin/shop/{status}`
async fn set_status(
    State(state): State<AppState>,
    status: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResult<()>>, ApiError> {
    let Path(status) = status?;
    state.shop.set_status(ShopStatus::from(status)).await?;
    Ok(Json(ApiResult::ok()))
}

/// GET `/admin/shop/status`, GET `/user/shop/status`
async fn get_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResult<ShopStatus>>, ApiError> {
    let status = state.shop.get_status().await?;
    Ok(Json(ApiResult::success_opt(status)))
}
