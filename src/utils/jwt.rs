use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, TokenPair};
use crate::utils::errors::AppError;

/// Which of the two token families a token belongs to.
///
/// Each kind signs with its own secret and lifetime, so an access token can
/// never pass verification as a refresh token or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    fn secret<'a>(&self, config: &'a JwtConfig) -> &'a [u8] {
        match self {
            TokenKind::Access => config.access_secret.as_bytes(),
            TokenKind::Refresh => config.refresh_secret.as_bytes(),
        }
    }

    fn expiry(&self, config: &JwtConfig) -> i64 {
        match self {
            TokenKind::Access => config.access_token_expiry,
            TokenKind::Refresh => config.refresh_token_expiry,
        }
    }
}

pub fn create_token(
    user_id: Uuid,
    kind: TokenKind,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: user_id.to_string(),
        jti: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + kind.expiry(jwt_config),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(kind.secret(jwt_config)),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to sign token: {}", e)))
}

/// Mints a fresh access/refresh pair for the given user.
pub fn issue_token_pair(user_id: Uuid, jwt_config: &JwtConfig) -> Result<TokenPair, AppError> {
    Ok(TokenPair {
        access_token: create_token(user_id, TokenKind::Access, jwt_config)?,
        refresh_token: create_token(user_id, TokenKind::Refresh, jwt_config)?,
    })
}

/// Verifies signature and expiry against the secret for `kind`.
pub fn verify_token(
    token: &str,
    kind: TokenKind,
    jwt_config: &JwtConfig,
) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(kind.secret(jwt_config)),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))
}

/// Extracts claims without checking the signature or expiry.
///
/// Only for resolving the user attached to an auth payload the server just
/// issued. Must never be the basis for granting access; guarded routes go
/// through [`verify_token`].
pub fn decode_token_insecure(token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("Malformed token")))
}
