//! Post data models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PaginationArgs;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate)]
pub struct CreatePostDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub content: Option<String>,
}

/// Sortable post fields.
///
/// The scan order also fixes what each cursor points at, so callers must
/// keep the order stable across paginated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOrderField {
    Id,
    Title,
    Published,
    CreatedAt,
    UpdatedAt,
}

impl PostOrderField {
    /// Column name for the ORDER BY clause. Field names go through this
    /// whitelist; nothing caller-supplied is interpolated into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            PostOrderField::Id => "id",
            PostOrderField::Title => "title",
            PostOrderField::Published => "published",
            PostOrderField::CreatedAt => "created_at",
            PostOrderField::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Query parameters for the published-posts connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListParams {
    /// Case-insensitive title substring filter.
    pub query: Option<String>,
    pub order_by: Option<PostOrderField>,
    pub direction: Option<OrderDirection>,
    #[serde(flatten)]
    pub pagination: PaginationArgs,
}
