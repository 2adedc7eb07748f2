//! Fixed user-facing messages returned in the envelope's `msg` field.

/// Object storage write failed.
pub const UPLOAD_FAILED: &str = "文件上传失败";

/// Multipart body had no `file` field.
pub const UPLOAD_FILE_MISSING: &str = "file is required";

/// Original filename has no `.` to take an extension from.
pub const FILE_EXTENSION_MISSING: &str = "file name has no extension";

/// Uploaded file exceeds the configured size limit.
pub const FILE_TOO_LARGE: &str = "file is too large";

/// Admin request carried no token.
pub const NOT_LOGIN: &str = "用户未登录";

/// Admin request carried an expired or malformed token.
pub const INVALID_TOKEN: &str = "invalid or expired token";

/// Fallback for server-side failures.
pub const UNKNOWN_ERROR: &str = "未知错误";
