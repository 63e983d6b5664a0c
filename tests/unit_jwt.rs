use inkpress::config::jwt::JwtConfig;
use inkpress::utils::jwt::{
    TokenKind, create_token, decode_token_insecure, issue_token_pair, verify_token,
};
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
fn test_create_and_verify_access_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();
    assert!(!token.is_empty());

    let claims = verify_token(&token, TokenKind::Access, &jwt_config).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_issue_token_pair() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let pair = issue_token_pair(user_id, &jwt_config).unwrap();

    assert_ne!(pair.access_token, pair.refresh_token);

    let access = verify_token(&pair.access_token, TokenKind::Access, &jwt_config).unwrap();
    let refresh = verify_token(&pair.refresh_token, TokenKind::Refresh, &jwt_config).unwrap();
    assert_eq!(access.sub, user_id.to_string());
    assert_eq!(refresh.sub, user_id.to_string());
}

#[test]
fn test_token_kinds_are_not_cross_valid() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let access = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();
    let refresh = create_token(user_id, TokenKind::Refresh, &jwt_config).unwrap();

    assert!(verify_token(&access, TokenKind::Refresh, &jwt_config).is_err());
    assert!(verify_token(&refresh, TokenKind::Access, &jwt_config).is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();

    let other_config = JwtConfig {
        access_secret: "a_completely_different_secret".to_string(),
        ..get_test_jwt_config()
    };

    assert!(verify_token(&token, TokenKind::Access, &other_config).is_err());
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = JwtConfig {
        // expired well past the default validation leeway
        access_token_expiry: -3600,
        ..get_test_jwt_config()
    };
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();

    assert!(verify_token(&token, TokenKind::Access, &jwt_config).is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        assert!(verify_token(token, TokenKind::Access, &jwt_config).is_err());
    }
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Refresh, &jwt_config).unwrap();
    let claims = verify_token(&token, TokenKind::Refresh, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, jwt_config.refresh_token_expiry);
}

#[test]
fn test_decode_insecure_reads_claims_without_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();
    let claims = decode_token_insecure(&token).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_decode_insecure_accepts_expired_tokens() {
    let jwt_config = JwtConfig {
        access_token_expiry: -3600,
        ..get_test_jwt_config()
    };
    let user_id = Uuid::new_v4();

    let token = create_token(user_id, TokenKind::Access, &jwt_config).unwrap();

    assert!(verify_token(&token, TokenKind::Access, &jwt_config).is_err());
    assert!(decode_token_insecure(&token).is_ok());
}

#[test]
fn test_decode_insecure_rejects_garbage() {
    assert!(decode_token_insecure("not a token at all").is_err());
    assert!(decode_token_insecure("").is_err());
}

#[test]
fn test_tokens_for_different_users_differ() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_token(user_id1, TokenKind::Access, &jwt_config).unwrap();
    let token2 = create_token(user_id2, TokenKind::Access, &jwt_config).unwrap();

    assert_ne!(token1, token2);
}
