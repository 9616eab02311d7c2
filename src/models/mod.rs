/// Data models for article-service
///
/// Persistent rows (`Article`, `Comment`) plus the response projections the
/// API returns. Projections carry owner emails instead of raw user ids and
/// compute their counts at read time; they are built per request and never
/// stored.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An article row. `user_id` is the owner and never changes after insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// Storage key of an attached image, if any. The bytes live elsewhere.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment row. `article_id` is immutable; the row is removed together
/// with its article.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List projection of an article: owner label and read-time counts, no body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    /// Owner's email, used as the display label
    pub user: String,
    pub likes_count: i64,
    pub comment_count: i64,
}

/// Comment projection: owner label instead of the raw user id, and no
/// article reference (the caller already knows the article context).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentView {
    pub id: Uuid,
    pub user: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail projection: the full article with nested comments and the emails
/// of everyone who liked it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: Uuid,
    pub user: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentView>,
    pub liked_by: Vec<String>,
}

/// Response body of the like toggle: the membership state after the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeToggle {
    pub liked: bool,
}
