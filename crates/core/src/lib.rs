//! Core logic for the Sky admin backend.
//!
//! This crate contains service logic with ZERO web dependencies. External
//! collaborators (object storage, key-value store) sit behind OpenDAL and the
//! [`shop::KvStore`] trait.
//!
//! # Modules
//!
//! - `audit` - Audit field auto-fill before persistence
//! - `storage` - Object storage for uploaded files
//! - `shop` - Shop open/closed status

pub mod audit;
pub mod shop;
pub mod storage;
