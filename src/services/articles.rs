/// Article service - handles article creation, retrieval, and management
///
/// Mutations follow a fixed discipline: the existence check comes first (you
/// cannot compare ownership on a row that is not there), then the ownership
/// gate, then payload validation, then the mutation itself, all inside one
/// transaction with the owner row locked so concurrent writes on the same
/// article serialize. A non-owner is told Forbidden regardless of payload
/// validity.
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Article, ArticleDetail, ArticleSummary, CommentView};
use crate::security::ensure_owner;
use crate::validators::ArticlePayload;

pub struct ArticleService {
    pool: PgPool,
}

/// Article row joined with its owner's email, used to build the detail shape.
#[derive(FromRow)]
struct ArticleWithOwner {
    id: Uuid,
    email: String,
    title: String,
    content: String,
    image: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl ArticleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every article in the store as list-shape summaries. No
    /// filtering; ordering follows insertion time and is not guaranteed
    /// stable across stores. Counts are computed at read time.
    pub async fn list_articles(&self) -> Result<Vec<ArticleSummary>> {
        let summaries = sqlx::query_as::<_, ArticleSummary>(
            r#"
            SELECT a.id,
                   a.title,
                   a.image,
                   u.email AS "user",
                   (SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS likes_count,
                   (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.id) AS comment_count
            FROM articles a
            JOIN users u ON u.id = a.user_id
            ORDER BY a.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Get the detail shape of one article: full fields, nested ordered
    /// comments, and the emails of everyone who liked it.
    pub async fn get_article(&self, article_id: Uuid) -> Result<ArticleDetail> {
        let article = sqlx::query_as::<_, ArticleWithOwner>(
            r#"
            SELECT a.id, u.email, a.title, a.content, a.image, a.created_at, a.updated_at
            FROM articles a
            JOIN users u ON u.id = a.user_id
            WHERE a.id = $1
            "#,
        )
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("article {article_id}")))?;

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

        // Who liked, as labels rather than opaque ids.
        let liked_by: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT u.email
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.article_id = $1
            ORDER BY u.email ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ArticleDetail {
            id: article.id,
            user: article.email,
            title: article.title,
            content: article.content,
            image: article.image,
            created_at: article.created_at,
            updated_at: article.updated_at,
            comments,
            liked_by,
        })
    }

    /// Create a new article owned by the authenticated principal.
    pub async fn create_article(&self, owner: Uuid, payload: ArticlePayload) -> Result<Article> {
        payload.validate()?;

        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (user_id, title, content, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, content, image, created_at, updated_at
            "#,
        )
        .bind(owner)
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(&payload.image)
        .fetch_one(&self.pool)
        .await?;

        Ok(article)
    }

    /// Replace an article's fields, re-validated as in create. The owner
    /// column is never reassigned.
    pub async fn update_article(
        &self,
        article_id: Uuid,
        principal: Uuid,
        payload: ArticlePayload,
    ) -> Result<Article> {
        let mut tx = self.pool.begin().await?;

        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM articles WHERE id = $1 FOR UPDATE")
                .bind(article_id)
                .fetch_optional(&mut *tx)
                .await?;

        let owner = owner.ok_or_else(|| AppError::NotFound(format!("article {article_id}")))?;
        ensure_owner(principal, owner)?;
        payload.validate()?;

        let article = sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles
            SET title = $1, content = $2, image = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, user_id, title, content, image, created_at, updated_at
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(&payload.image)
        .bind(article_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(article)
    }

    /// Delete an article. Comments and like rows go with it in the same
    /// transaction (FK cascade), so readers never observe a half-deleted
    /// article.
    pub async fn delete_article(&self, article_id: Uuid, principal: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM articles WHERE id = $1 FOR UPDATE")
                .bind(article_id)
                .fetch_optional(&mut *tx)
                .await?;

        let owner = owner.ok_or_else(|| AppError::NotFound(format!("article {article_id}")))?;
        ensure_owner(principal, owner)?;

        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(article_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
