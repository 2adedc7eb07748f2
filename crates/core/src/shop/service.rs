//! Shop status service implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::error::{KvError, ShopError};
use super::types::ShopStatus;

/// Key the shop status is stored under.
pub const SHOP_STATUS_KEY: &str = "SHOP STATUS";

/// String key-value store.
///
/// Implemented by the store crate (Redis, in-memory).
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a key, `None` if it was never set.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Write a key, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), KvError>;
}

/// Reads and writes the shop status flag.
#[derive(Clone)]
pub struct ShopService {
    store: Arc<dyn KvStore>,
    timeout: Duration,
}

impl ShopService {
    /// Default timeout: 5 seconds.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a new shop service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Store `status` verbatim. No range check is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or times out.
    pub async fn set_status(&self, status: ShopStatus) -> Result<(), ShopError> {
        info!(status = status.0, state = status.label(), "setting shop status");
        self.bounded(self.store.set(SHOP_STATUS_KEY, status.0.to_string()))
            .await??;
        Ok(())
    }

    /// Current status, `None` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails, times out, or holds a non-integer.
    pub async fn get_status(&self) -> Result<Option<ShopStatus>, ShopError> {
        let raw = self.bounded(self.store.get(SHOP_STATUS_KEY)).await??;

        let status = raw
            .map(|value| {
                value
                    .trim()
                    .parse::<i32>()
                    .map(ShopStatus)
                    .map_err(|_| ShopError::Corrupt { value })
            })
            .transpose()?;

        info!(
            status = status.map(|s| s.0),
            state = status.map_or("unset", ShopStatus::label),
            "fetched shop status"
        );
        Ok(status)
    }

    async fn bounded<F: Future>(&self, fut: F) -> Result<F::Output, ShopError> {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| ShopError::Timeout {
                secs: self.timeout.as_secs(),
            })
    }
}
