//! Object storage for uploaded files using Apache OpenDAL.
//!
//! This module provides vendor-agnostic object storage with support for:
//! - S3-compatible: Aliyun OSS, Cloudflare R2, AWS S3
//! - Azure Blob Storage
//! - Local filesystem (development only)
//! - In-process memory (tests)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  upload(bytes, "photo.png")                                     │
//! │    ├─ extension  ".png"      (substring from the last '.')      │
//! │    ├─ name       "{uuid-v4}.png"                                │
//! │    ├─ op.write(name, bytes)  (bounded by the external timeout)  │
//! │    └─ url        "{public_base_url}/{name}"                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{StorageService, StoredObject, extension_of, object_name_for};
