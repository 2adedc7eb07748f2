//! Key-value store backends.
//!
//! This crate provides implementations of [`sky_core::shop::KvStore`]:
//! - [`RedisStore`] for deployments
//! - [`MemoryStore`] for development and tests

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use std::sync::Arc;

use sky_core::shop::{KvError, KvStore};
use tracing::{info, warn};

/// Connects to Redis when `redis_url` is set, otherwise falls back to an
/// in-process store.
///
/// # Errors
///
/// Returns an error if a Redis URL is given but the connection cannot be
/// established.
pub async fn connect(redis_url: Option<&str>) -> Result<Arc<dyn KvStore>, KvError> {
    match redis_url {
        Some(url) => {
            let store = RedisStore::connect(url).await?;
            info!("Connected to Redis");
            Ok(Arc::new(store))
        }
        None => {
            warn!("No Redis URL configured, shop status will not survive restarts");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
