//! Shop status error types.

use thiserror::Error;

/// Failure reported by a key-value store backend.
#[derive(Debug, Error)]
pub enum KvError {
    /// Could not reach the store.
    #[error("key-value store unavailable: {0}")]
    Connection(String),

    /// The store rejected or failed the command.
    #[error("key-value command failed: {0}")]
    Command(String),
}

/// Shop status operation errors.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] KvError),

    /// Stored value is not an integer.
    #[error("corrupt shop status value: {value:?}")]
    Corrupt {
        /// Raw stored value.
        value: String,
    },

    /// The store did not answer in time.
    #[error("key-value store timed out after {secs}s")]
    Timeout {
        /// Configured timeout in seconds.
        secs: u64,
    },
}
