//! Shared types, errors, and configuration for Sky.
//!
//! This crate provides common types used across all other crates:
//! - The uniform `{code, msg, data}` result envelope
//! - Application-wide error types
//! - JWT claims and token validation for the admin surface
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod message;
pub mod result;

#[cfg(test)]
mod jwt_tests;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, JwtService};
pub use result::ApiResult;
