//! In-process key-value store using Moka.

use async_trait::async_trait;
use moka::future::Cache;
use sky_core::shop::{KvError, KvStore};

/// Default capacity (number of keys).
const DEFAULT_CAPACITY: u64 = 10_000;

/// In-process store. Values are lost on restart.
#[derive(Clone)]
pub struct MemoryStore {
    cache: Cache<String, String>,
}

impl MemoryStore {
    /// Creates an empty store with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty store holding at most `max_capacity` keys.
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { cache }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        self.cache.insert(key.to_string(), value).await;
        Ok(())
    }
}
