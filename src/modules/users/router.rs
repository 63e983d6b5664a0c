use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{change_password, me, update_profile, user_posts};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me).put(update_profile))
        .route("/me/change-password", post(change_password))
        .route("/{user_id}/posts", get(user_posts))
}
