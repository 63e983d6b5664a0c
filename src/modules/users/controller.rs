use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::posts::model::Post;
use crate::modules::posts::service::PostService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{ChangePasswordDto, UpdateProfileDto, User};
use super::service::UserService;

/// The authenticated user's profile.
#[instrument(skip(user))]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

#[instrument(skip(state, user, dto))]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<User>, AppError> {
    let updated = UserService::update_profile(&state.db, user.id, dto).await?;
    Ok(Json(updated))
}

#[instrument(skip(state, user, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<User>, AppError> {
    let updated =
        UserService::change_password(&state.db, user.id, dto, &state.security_config).await?;
    Ok(Json(updated))
}

/// A user's published posts (public).
#[instrument(skip(state))]
pub async fn user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::user_posts(&state.db, user_id).await?;
    Ok(Json(posts))
}
