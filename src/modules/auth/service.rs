use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::config::security::SecurityConfig;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenKind, decode_token_insecure, issue_token_pair, verify_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, SignupRequest, TokenPair};

/// Emails are compared case-insensitively: addresses are lowercased before
/// every store lookup or insert.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

const USER_COLUMNS: &str = "id, email, first_name, last_name, role, created_at, updated_at";

pub struct AuthService;

impl AuthService {
    /// Creates a user and returns a fresh token pair scoped to it.
    ///
    /// Email uniqueness is enforced by the store; a unique-constraint
    /// violation surfaces as a conflict.
    #[instrument(skip(db, dto, jwt_config, security))]
    pub async fn signup(
        db: &PgPool,
        dto: SignupRequest,
        jwt_config: &JwtConfig,
        security: &SecurityConfig,
    ) -> Result<TokenPair, AppError> {
        let email = normalize_email(&dto.email);
        let hashed_password = hash_password(&dto.password, security)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (first_name, last_name, email, password) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(anyhow::anyhow!("Email {} already used", email))
            }
            _ => AppError::database(e),
        })?;

        issue_token_pair(user.id, jwt_config)
    }

    /// Checks credentials and returns a fresh token pair.
    ///
    /// An unknown email and a wrong password are distinct outcomes (404 vs
    /// 400), matching the store's view of the failure.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenPair, AppError> {
        #[derive(sqlx::FromRow)]
        struct Credentials {
            id: Uuid,
            password: String,
        }

        let email = normalize_email(&dto.email);

        let credentials =
            sqlx::query_as::<_, Credentials>("SELECT id, password FROM users WHERE email = $1")
                .bind(&email)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(anyhow::anyhow!("No user found for email: {}", email))
                })?;

        let password_valid = verify_password(&dto.password, &credentials.password)?;
        if !password_valid {
            return Err(AppError::bad_request(anyhow::anyhow!("Invalid password")));
        }

        issue_token_pair(credentials.id, jwt_config)
    }

    /// Exchanges a valid refresh token for a new pair.
    ///
    /// Both tokens are rotated. There is no server-side blacklist: the
    /// superseded refresh token keeps working until its own expiry.
    #[instrument(skip(token, jwt_config))]
    pub fn refresh_token(token: &str, jwt_config: &JwtConfig) -> Result<TokenPair, AppError> {
        let claims = verify_token(token, TokenKind::Refresh, jwt_config)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid refresh token")))?;

        issue_token_pair(user_id, jwt_config)
    }

    /// Confirms the user behind an already-verified token still exists.
    pub async fn validate_user(db: &PgPool, user_id: Uuid) -> Result<Option<User>, AppError> {
        let user =
            sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(user_id)
                .fetch_optional(db)
                .await?;

        Ok(user)
    }

    /// Resolves the user an auth payload's access token points at.
    ///
    /// The token is decoded, not verified; this only serves payloads the
    /// server itself just issued, never authorization.
    pub async fn get_user_from_token(db: &PgPool, token: &str) -> Result<Option<User>, AppError> {
        let claims = decode_token_insecure(token)?;

        let Ok(user_id) = Uuid::parse_str(&claims.sub) else {
            return Ok(None);
        };

        Self::validate_user(db, user_id).await
    }
}
