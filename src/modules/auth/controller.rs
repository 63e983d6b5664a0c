use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, RefreshTokenRequest, SignupRequest, TokenPair};
use super::service::AuthService;

async fn auth_response(state: &AppState, tokens: TokenPair) -> Result<AuthResponse, AppError> {
    let user = AuthService::get_user_from_token(&state.db, &tokens.access_token).await?;

    Ok(AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        user,
    })
}

/// Register a new account and receive a token pair.
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let tokens =
        AuthService::signup(&state.db, dto, &state.jwt_config, &state.security_config).await?;
    let response = auth_response(&state, tokens).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Exchange credentials for a token pair.
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let tokens = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    let response = auth_response(&state, tokens).await?;

    Ok(Json(response))
}

/// Exchange a refresh token for a rotated token pair.
#[instrument(skip(state, dto))]
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let tokens = AuthService::refresh_token(&dto.token, &state.jwt_config)?;

    Ok(Json(tokens))
}
