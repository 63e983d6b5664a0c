use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::security::SecurityConfig;
use crate::modules::users::model::{ChangePasswordDto, UpdateProfileDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

const USER_COLUMNS: &str = "id, email, first_name, last_name, role, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET first_name = $1, last_name = $2, updated_at = now() \
             WHERE id = $3 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id)))?;

        Ok(user)
    }

    /// Verifies the old password before storing a hash of the new one.
    #[instrument(skip(db, dto, security))]
    pub async fn change_password(
        db: &PgPool,
        user_id: Uuid,
        dto: ChangePasswordDto,
        security: &SecurityConfig,
    ) -> Result<User, AppError> {
        let stored_hash =
            sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id))
                })?;

        let password_valid = verify_password(&dto.old_password, &stored_hash)?;
        if !password_valid {
            return Err(AppError::bad_request(anyhow::anyhow!("Invalid password")));
        }

        let hashed_password = hash_password(&dto.new_password, security)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET password = $1, updated_at = now() \
             WHERE id = $2 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&hashed_password)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(user)
    }
}
