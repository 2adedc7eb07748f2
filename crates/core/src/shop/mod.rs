//! Shop open/closed status kept in an external key-value store.
//!
//! The flag lives only in the store under [`SHOP_STATUS_KEY`]; no copy is
//! kept in process, so every read goes to the store.

mod error;
mod service;
mod types;

pub use error::{KvError, ShopError};
pub use service::{KvStore, SHOP_STATUS_KEY, ShopService};
pub use types::ShopStatus;
