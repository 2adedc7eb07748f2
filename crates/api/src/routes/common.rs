//! Common admin endpoints: file upload.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use sky_shared::{ApiResult, AppError, message};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Creates the upload routes, accepting bodies up to `max_file_size` plus
/// multipart framing.
pub fn routes(max_file_size: u64) -> Router<AppState> {
    let limit = usize::try_from(max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/admin/common/upload", post(upload))
        .layer(DefaultBodyLimit::max(limit))
}

/// POST `/admin/common/upload`
/// Store the `file` part under a random name and return its URL.
async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResult<String>>, ApiError> {
    let mut multipart = multipart?;
    let (filename, data) = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation(message::UPLOAD_FILE_MISSING.to_string()))?;

    info!(
        user_id = auth.user_id(),
        filename = %filename,
        size = data.len(),
        "file upload"
    );

    let stored = state.storage.upload(data, &filename).await?;

    Ok(Json(ApiResult::success(stored.url)))
}

/// Filename and content of the first `file` part. A part without a filename
/// yields an empty name.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<(String, Bytes)>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(Some((filename, data)));
    }
    Ok(None)
}
