//! Authentication middleware for admin routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{AppState, error::ApiError};
use sky_core::audit::AuditContext;
use sky_shared::{AppError, Claims, JwtError, message};

/// Header the admin console sends its token in.
pub const TOKEN_HEADER: &str = "token";

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Token from the `token` header, falling back to `Authorization: Bearer`.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(extract_bearer_token)
        })
        .filter(|t| !t.is_empty())
}

/// Authentication middleware that validates admin JWT tokens.
///
/// This middleware:
/// 1. Extracts the token from the `token` header (or `Authorization: Bearer`)
/// 2. Validates the token using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(request.headers()) else {
        return ApiError(AppError::Unauthorized(message::NOT_LOGIN.to_string())).into_response();
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            debug!(user_id = claims.user_id(), "token accepted");
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "token rejected");
            let msg = match e {
                JwtError::Expired => "token has expired",
                _ => message::INVALID_TOKEN,
            };
            ApiError(AppError::Unauthorized(msg.to_string())).into_response()
        }
    }
}

/// Extractor for the authenticated employee.
///
/// Carries the current user explicitly into handlers instead of through
/// thread-local state:
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let ctx = auth.audit_context();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the employee ID from the claims.
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.0.user_id()
    }

    /// Audit context for a write performed by this employee, stamped now.
    #[must_use]
    pub fn audit_context(&self) -> AuditContext {
        AuditContext::new(self.user_id())
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError(AppError::Unauthorized(message::NOT_LOGIN.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::post,
    };
    use sky_core::audit::{AuditFields, OperationType};
    use tower::ServiceExt;

    use crate::testing::{body_json, test_state, token_for};

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }

    #[test]
    fn test_extract_token_prefers_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, "from-token".parse().unwrap());
        headers.insert(AUTHORIZATION, "Bearer from-auth".parse().unwrap());
        assert_eq!(extract_token(&headers), Some("from-token"));

        headers.remove(TOKEN_HEADER);
        assert_eq!(extract_token(&headers), Some("from-auth"));

        headers.remove(AUTHORIZATION);
        assert_eq!(extract_token(&headers), None);
    }

    /// Handler that persists an entity through the audit step, the way a
    /// write endpoint would.
    async fn create_record(
        axum::extract::State(state): axum::extract::State<AppState>,
        auth: AuthUser,
    ) -> Json<AuditFields> {
        let saved = state
            .auto_fill
            .around(
                OperationType::Insert,
                &auth.audit_context(),
                AuditFields::default(),
                |fields| async move { fields },
            )
            .await
            .expect("lenient fill never fails");
        Json(saved)
    }

    fn protected_app(state: AppState) -> Router {
        Router::new()
            .route("/admin/records", post(create_record))
            .layer(from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected() {
        let app = protected_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["msg"], message::NOT_LOGIN);
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected() {
        let app = protected_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/records")
                    .header(TOKEN_HEADER, "not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["msg"], message::INVALID_TOKEN);
    }

    #[tokio::test]
    async fn test_current_user_flows_into_audit_fields() {
        let state = test_state();
        let token = token_for(&state, 42);
        let app = protected_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/records")
                    .header(TOKEN_HEADER, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["createUser"], 42);
        assert_eq!(body["updateUser"], 42);
        assert_eq!(body["createTime"], body["updateTime"]);
        assert!(body["createTime"].is_string());
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_rejects() {
        let state = test_state();
        let app = Router::new()
            .route("/admin/records", post(create_record))
            .with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/records")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
