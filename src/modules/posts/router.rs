use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_post, get_post, post_events, published_posts};

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(published_posts).post(create_post))
        .route("/events", get(post_events))
        .route("/{post_id}", get(get_post))
}
