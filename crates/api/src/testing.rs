//! Helpers shared by route tests.

use std::sync::Arc;

use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sky_core::audit::AutoFill;
use sky_core::shop::ShopService;
use sky_core::storage::{StorageConfig, StorageProvider, StorageService};
use sky_shared::{JwtConfig, JwtService};
use sky_store::MemoryStore;

use crate::AppState;

/// Public base URL used by the test storage.
pub const TEST_BASE_URL: &str = "https://sky-test.oss-cn-beijing.aliyuncs.com";

/// State backed by in-memory storage and key-value store.
pub fn test_state() -> AppState {
    test_state_with(StorageConfig::new(StorageProvider::Memory).with_public_base_url(TEST_BASE_URL))
}

/// State with a custom storage configuration.
pub fn test_state_with(storage: StorageConfig) -> AppState {
    AppState {
        jwt_service: Arc::new(JwtService::new(JwtConfig::default())),
        storage: Arc::new(StorageService::from_config(storage).expect("memory storage")),
        shop: ShopService::new(Arc::new(MemoryStore::new())),
        auto_fill: AutoFill::default(),
    }
}

/// Valid admin token for `emp_id`.
pub fn token_for(state: &AppState, emp_id: i64) -> String {
    state
        .jwt_service
        .generate_token(emp_id)
        .expect("should generate token")
}

/// Collects a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}
