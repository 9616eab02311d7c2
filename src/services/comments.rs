/// Comment service - handles comment creation, retrieval, and management
///
/// Same mutation discipline as articles: existence check, then the ownership
/// gate, then payload validation, then the write, inside one transaction. A
/// comment's article reference is fixed at creation and never updated.
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Comment, CommentView};
use crate::security::ensure_owner;
use crate::validators::CommentPayload;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all comments of an article in natural order. Listing comments of
    /// a missing article is an error on the article, not an empty list.
    pub async fn list_comments(&self, article_id: Uuid) -> Result<Vec<CommentView>> {
        self.ensure_article_exists(article_id).await?;

        let comments = sqlx::query_as::<_, CommentView>(
            r#"
            SELECT c.id, u.email AS "user", c.content, c.created_at, c.updated_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.article_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Create a comment on an existing article.
    pub async fn create_comment(
        &self,
        article_id: Uuid,
        owner: Uuid,
        payload: CommentPayload,
    ) -> Result<Comment> {
        self.ensure_article_exists(article_id).await?;
        payload.validate()?;

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (article_id, user_id, content)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(article_id)
        .bind(owner)
        .bind(&payload.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// Update a comment's content, re-validated as in create. Owner only.
    pub async fn update_comment(
        &self,
        comment_id: Uuid,
        principal: Uuid,
        payload: CommentPayload,
    ) -> Result<Comment> {
        let mut tx = self.pool.begin().await?;

        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM comments WHERE id = $1 FOR UPDATE")
                .bind(comment_id)
                .fetch_optional(&mut *tx)
                .await?;

        let owner = owner.ok_or_else(|| AppError::NotFound(format!("comment {comment_id}")))?;
        ensure_owner(principal, owner)?;
        payload.validate()?;

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, article_id, user_id, content, created_at, updated_at
            "#,
        )
        .bind(&payload.content)
        .bind(comment_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(comment)
    }

    /// Delete a comment. Owner only.
    pub async fn delete_comment(&self, comment_id: Uuid, principal: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM comments WHERE id = $1 FOR UPDATE")
                .bind(comment_id)
                .fetch_optional(&mut *tx)
                .await?;

        let owner = owner.ok_or_else(|| AppError::NotFound(format!("comment {comment_id}")))?;
        ensure_owner(principal, owner)?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn ensure_article_exists(&self, article_id: Uuid) -> Result<()> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE id = $1)")
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("article {article_id}")))
        }
    }
}
