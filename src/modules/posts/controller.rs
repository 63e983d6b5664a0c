use std::convert::Infallible;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::Connection;
use crate::validator::ValidatedJson;

use super::model::{CreatePostDto, Post, PostListParams};
use super::service::PostService;

/// Create a post and broadcast it to event subscribers.
#[instrument(skip(state, user, dto))]
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = PostService::create_post(&state.db, user.id, dto).await?;
    state.post_events.publish(post.clone());

    Ok((StatusCode::CREATED, Json(post)))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::get_post(&state.db, post_id).await?;
    Ok(Json(post))
}

/// Published posts as a cursor connection.
#[instrument(skip(state, params))]
pub async fn published_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> Result<Json<Connection<Post>>, AppError> {
    let connection = PostService::published_posts(&state.db, &params).await?;
    Ok(Json(connection))
}

/// Server-sent stream of post-created events.
///
/// Events published before the request arrived are not replayed.
#[instrument(skip(state))]
pub async fn post_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.post_events.subscribe()).filter_map(|msg| {
        // a lagged receiver drops the missed events and keeps streaming
        msg.ok()
            .and_then(|post| Event::default().event("post_created").json_data(&post).ok())
            .map(Ok::<_, Infallible>)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
