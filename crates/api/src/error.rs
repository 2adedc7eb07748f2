//! Rendering of application errors as result envelopes.

use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use sky_core::shop::ShopError;
use sky_core::storage::StorageError;
use sky_shared::{ApiResult, AppError, message};

/// Error returned by handlers; renders as `{code: 0, msg, data: null}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::MissingExtension { .. } => {
                AppError::Validation(message::FILE_EXTENSION_MISSING.to_string())
            }
            StorageError::FileTooLarge { .. } => {
                AppError::PayloadTooLarge(message::FILE_TOO_LARGE.to_string())
            }
            other => {
                error!(error = %other, "file upload failed");
                AppError::Business(message::UPLOAD_FAILED.to_string())
            }
        };
        Self(app)
    }
}

impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        Self(AppError::ExternalService(err.to_string()))
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let app = if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(message::FILE_TOO_LARGE.to_string())
        } else {
            AppError::Validation(err.body_text())
        };
        Self(app)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), error = %self.0, "request failed");
        } else {
            debug!(code = self.0.error_code(), error = %self.0, "request rejected");
        }

        let body = ApiResult::<()>::error(self.0.client_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_business_error_is_http_200_with_code_0() {
        let (status, body) =
            render(ApiError::from(StorageError::Operation("oss down".into()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "code": 0, "msg": message::UPLOAD_FAILED, "data": null })
        );
    }

    #[tokio::test]
    async fn test_storage_timeout_maps_to_upload_failed() {
        let (status, body) = render(ApiError::from(StorageError::Timeout { secs: 5 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], message::UPLOAD_FAILED);
    }

    #[tokio::test]
    async fn test_missing_extension_is_bad_request() {
        let (status, body) =
            render(ApiError::from(StorageError::missing_extension("photo"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 0);
        assert_eq!(body["msg"], message::FILE_EXTENSION_MISSING);
    }

    #[tokio::test]
    async fn test_file_too_large_is_413() {
        let (status, _) =
            render(ApiError::from(StorageError::file_too_large(11, 10))).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_shop_error_hides_details() {
        let (status, body) =
            render(ApiError::from(ShopError::Timeout { secs: 5 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["msg"], message::UNKNOWN_ERROR);
    }
}
