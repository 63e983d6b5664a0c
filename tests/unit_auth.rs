//! Token-lifecycle behavior of the auth service that needs no database:
//! refresh verification, rotation, and the stateless-reuse property.

use axum::http::StatusCode;
use inkpress::config::jwt::JwtConfig;
use inkpress::modules::auth::service::AuthService;
use inkpress::utils::jwt::{TokenKind, create_token, issue_token_pair, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: "access_secret_for_testing_purposes".to_string(),
        refresh_secret: "refresh_secret_for_testing_purposes".to_string(),
        access_token_expiry: 120,
        refresh_token_expiry: 604800,
    }
}

#[test]
fn test_refresh_returns_pair_for_token_owner() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();
    let pair = issue_token_pair(user_id, &jwt_config).unwrap();

    let rotated = AuthService::refresh_token(&pair.refresh_token, &jwt_config).unwrap();

    let access = verify_token(&rotated.access_token, TokenKind::Access, &jwt_config).unwrap();
    let refresh = verify_token(&rotated.refresh_token, TokenKind::Refresh, &jwt_config).unwrap();
    assert_eq!(access.sub, user_id.to_string());
    assert_eq!(refresh.sub, user_id.to_string());
}

#[test]
fn test_refresh_rejects_access_token() {
    let jwt_config = get_test_jwt_config();
    let access = create_token(Uuid::new_v4(), TokenKind::Access, &jwt_config).unwrap();

    let err = AuthService::refresh_token(&access, &jwt_config).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_refresh_rejects_expired_token() {
    let jwt_config = JwtConfig {
        refresh_token_expiry: -3600,
        ..get_test_jwt_config()
    };
    let refresh = create_token(Uuid::new_v4(), TokenKind::Refresh, &jwt_config).unwrap();

    let err = AuthService::refresh_token(&refresh, &jwt_config).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_refresh_rejects_garbage() {
    let jwt_config = get_test_jwt_config();

    let err = AuthService::refresh_token("definitely.not.a.jwt", &jwt_config).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_refresh_rotates_both_tokens() {
    let jwt_config = get_test_jwt_config();
    let pair = issue_token_pair(Uuid::new_v4(), &jwt_config).unwrap();

    let first = AuthService::refresh_token(&pair.refresh_token, &jwt_config).unwrap();
    let second = AuthService::refresh_token(&pair.refresh_token, &jwt_config).unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_ne!(first.access_token, second.access_token);
}

#[test]
fn test_superseded_refresh_token_still_works() {
    // Verification is stateless (signature + expiry only), so rotation does
    // not invalidate the earlier refresh token server-side. This documents
    // the intended behavior, not a bug.
    let jwt_config = get_test_jwt_config();
    let pair = issue_token_pair(Uuid::new_v4(), &jwt_config).unwrap();

    let _rotated = AuthService::refresh_token(&pair.refresh_token, &jwt_config).unwrap();

    assert!(AuthService::refresh_token(&pair.refresh_token, &jwt_config).is_ok());
}
