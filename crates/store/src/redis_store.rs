//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use sky_core::shop::{KvError, KvStore};

/// Redis store over a multiplexed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Opens a connection to `url`.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Connection` if the URL is invalid or Redis is
    /// unreachable.
    pub async fn connect(url: &str) -> Result<Self, KvError> {
        let client = redis::Client::open(url).map_err(connection_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(connection_error)?;
        Ok(Self { conn })
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(command_error)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(command_error)
    }
}

fn connection_error(err: redis::RedisError) -> KvError {
    KvError::Connection(err.to_string())
}

fn command_error(err: redis::RedisError) -> KvError {
    if err.is_connection_dropped() || err.is_connection_refusal() || err.is_timeout() {
        KvError::Connection(err.to_string())
    } else {
        KvError::Command(err.to_string())
    }
}
