//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payload exceeds a configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Business failure reported to the caller with a fixed message.
    ///
    /// Rendered with HTTP 200 and `code: 0`, like every other business error
    /// the admin console understands.
    #[error("{0}")]
    Business(String),

    /// External service error (object storage, key-value store).
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Validation(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::Business(_) => 200,
            Self::ExternalService(_) => 500,
        }
    }

    /// Returns the error code for logs and structured responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::Business(_) => "BUSINESS_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }

    /// Message shown to the caller in the envelope's `msg` field.
    ///
    /// Internal details of 5xx errors stay in the logs.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Unauthorized(msg)
            | Self::Validation(msg)
            | Self::PayloadTooLarge(msg)
            | Self::Business(msg) => msg.clone(),
            Self::ExternalService(_) => crate::message::UNKNOWN_ERROR.to_string(),
        }
    }
}
