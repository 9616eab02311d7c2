/// Like service - atomic like toggling and counts
///
/// The like relation is a plain membership table with a unique
/// `(article_id, user_id)` constraint; set semantics forbid duplicates. The
/// toggle is a single read-modify-write transaction, so two concurrent
/// toggles on the same pair serialize on the unique index and the net effect
/// matches some serial ordering of the calls.
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::LikeToggle;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the caller's like on an article and report the resulting
    /// membership state (added → `liked: true`). Each call flips exactly
    /// once; a retried request flips again.
    pub async fn toggle_like(&self, article_id: Uuid, principal: Uuid) -> Result<LikeToggle> {
        let mut tx = self.pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)")
            .bind(article_id)
            .fetch_one(&mut *tx)
            .await?;

        if !exists {
            return Err(AppError::NotFound(format!("article {article_id}")));
        }

        let inserted: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO likes (article_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (article_id, user_id) DO NOTHING
            RETURNING article_id
            "#,
        )
        .bind(article_id)
        .bind(principal)
        .fetch_optional(&mut *tx)
        .await?;

        let liked = if inserted.is_some() {
            true
        } else {
            // Already a member: this call removes the like.
            sqlx::query("DELETE FROM likes WHERE article_id = $1 AND user_id = $2")
                .bind(article_id)
                .bind(principal)
                .execute(&mut *tx)
                .await?;
            false
        };

        tx.commit().await?;

        Ok(LikeToggle { liked })
    }

    /// Cardinality of the article's like set. Computed on demand, never
    /// cached.
    pub async fn like_count(&self, article_id: Uuid) -> Result<i64> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;

        if !exists {
            return Err(AppError::NotFound(format!("article {article_id}")));
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
