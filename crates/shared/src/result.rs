//! Uniform `{code, msg, data}` result envelope returned by every endpoint.

use serde::{Deserialize, Serialize};

/// `code` value for a successful call.
pub const CODE_SUCCESS: i32 = 1;

/// `code` value for a failed call.
pub const CODE_ERROR: i32 = 0;

/// Result envelope shared across the whole admin surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    /// 1 for success, 0 for failure.
    pub code: i32,
    /// Failure message, `null` on success.
    pub msg: Option<String>,
    /// Payload, `null` when the call returns nothing.
    pub data: Option<T>,
}

impl ApiResult<()> {
    /// Success without a payload.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: None,
            data: None,
        }
    }
}

impl<T> ApiResult<T> {
    /// Success carrying `data`.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: None,
            data: Some(data),
        }
    }

    /// Success carrying a value that may be absent.
    #[must_use]
    pub fn success_opt(data: Option<T>) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: None,
            data,
        }
    }

    /// Failure with a message.
    #[must_use]
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: CODE_ERROR,
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// Whether this envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_with_null_msg() {
        let body = serde_json::to_value(ApiResult::success("https://cdn/x.png")).unwrap();
        assert_eq!(
            body,
            json!({ "code": 1, "msg": null, "data": "https://cdn/x.png" })
        );
    }

    #[test]
    fn test_ok_has_null_data() {
        let body = serde_json::to_value(ApiResult::ok()).unwrap();
        assert_eq!(body, json!({ "code": 1, "msg": null, "data": null }));
    }

    #[test]
    fn test_success_opt_none_is_still_success() {
        let result = ApiResult::<i32>::success_opt(None);
        assert!(result.is_success());
        assert_eq!(result.data, None);
    }

    #[test]
    fn test_error_envelope() {
        let result = ApiResult::<String>::error("boom");
        assert!(!result.is_success());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "code": 0, "msg": "boom", "data": null })
        );
    }
}
