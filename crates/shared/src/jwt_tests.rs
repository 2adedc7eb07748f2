//! Unit tests for JWT functionality.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use crate::auth::Claims;
use crate::jwt::{JwtConfig, JwtError, JwtService};

fn create_test_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        ttl_secs: 3600,
    })
}

#[test]
fn test_claims_new_sets_correct_fields() {
    let expires_at = Utc::now() + Duration::hours(1);

    let claims = Claims::new(42, expires_at);

    assert_eq!(claims.sub, 42);
    assert_eq!(claims.user_id(), 42);
    assert!(claims.iat <= Utc::now().timestamp());
    assert_eq!(claims.exp, expires_at.timestamp());
}

#[test]
fn test_generate_and_validate_token() {
    let service = create_test_service();

    let token = service.generate_token(7).unwrap();
    let claims = service.validate_token(&token).unwrap();

    assert_eq!(claims.user_id(), 7);
}

#[test]
fn test_invalid_token() {
    let service = create_test_service();
    let result = service.validate_token("invalid.token.here");
    assert!(matches!(result, Err(JwtError::DecodingError(_))));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = JwtService::new(JwtConfig {
        secret: "another-secret".to_string(),
        ttl_secs: 3600,
    });
    let token = issuer.generate_token(1).unwrap();

    assert!(create_test_service().validate_token(&token).is_err());
}

#[test]
fn test_expired_token() {
    let claims = Claims {
        sub: 1,
        iat: (Utc::now() - Duration::hours(3)).timestamp(),
        exp: (Utc::now() - Duration::hours(2)).timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret-key-for-testing"),
    )
    .unwrap();

    let result = create_test_service().validate_token(&token);
    assert!(matches!(result, Err(JwtError::Expired)));
}
