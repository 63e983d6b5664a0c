use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::Connection;

use super::model::{CreatePostDto, OrderDirection, Post, PostListParams, PostOrderField};

const POST_COLUMNS: &str = "id, title, content, published, author_id, created_at, updated_at";

/// Escapes LIKE metacharacters so the title filter matches the search
/// string literally instead of treating `%` and `_` as wildcards.
fn escape_like(pattern: &str) -> String {
    pattern
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub struct PostService;

impl PostService {
    /// Creates a post, published immediately.
    #[instrument(skip(db, dto))]
    pub async fn create_post(
        db: &PgPool,
        author_id: Uuid,
        dto: CreatePostDto,
    ) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts (title, content, published, author_id) \
             VALUES ($1, $2, TRUE, $3) \
             RETURNING {POST_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(author_id)
        .fetch_one(db)
        .await?;

        Ok(post)
    }

    #[instrument(skip(db))]
    pub async fn get_post(db: &PgPool, post_id: Uuid) -> Result<Post, AppError> {
        let post =
            sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
                .bind(post_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(anyhow::anyhow!("Post with id {} not found", post_id))
                })?;

        Ok(post)
    }

    /// Published posts as a cursor connection.
    ///
    /// The page window fetches one extra row for the next-page flag; the
    /// total count runs as a separate query over the same filter predicate.
    #[instrument(skip(db, params))]
    pub async fn published_posts(
        db: &PgPool,
        params: &PostListParams,
    ) -> Result<Connection<Post>, AppError> {
        let window = params.pagination.window()?;
        let order = params.order_by.unwrap_or(PostOrderField::CreatedAt);
        let direction = params.direction.unwrap_or(OrderDirection::Asc);
        let title_filter = escape_like(params.query.as_deref().unwrap_or_default());

        // id tiebreaker keeps the scan order total, so cursor positions are
        // stable across requests.
        let nodes = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE published = TRUE AND title ILIKE '%' || $1 || '%' \
             ORDER BY {} {}, id ASC \
             LIMIT $2 OFFSET $3",
            order.column(),
            direction.sql()
        ))
        .bind(&title_filter)
        .bind(window.fetch_limit())
        .bind(window.offset)
        .fetch_all(db)
        .await?;

        let total_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts \
             WHERE published = TRUE AND title ILIKE '%' || $1 || '%'",
        )
        .bind(&title_filter)
        .fetch_one(db)
        .await?;

        Ok(Connection::from_window(nodes, total_count, &window))
    }

    /// A user's published posts, newest first.
    #[instrument(skip(db))]
    pub async fn user_posts(db: &PgPool, user_id: Uuid) -> Result<Vec<Post>, AppError> {
        let user_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(db)
                .await?;

        if !user_exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "User with id {} not found",
                user_id
            )));
        }

        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE author_id = $1 AND published = TRUE \
             ORDER BY created_at DESC, id ASC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(posts)
    }
}
