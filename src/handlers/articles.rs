/// Article handlers - HTTP endpoints for article operations
///
/// Reads are public; writes require an authenticated principal resolved by
/// the JWT middleware. Payload validation happens in the service layer so
/// the ownership gate always runs first on updates.
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::ArticleService;
use crate::validators::ArticlePayload;

/// List all articles (list shape)
pub async fn list_articles(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = ArticleService::new((**pool).clone());
    let articles = service.list_articles().await?;

    Ok(HttpResponse::Ok().json(articles))
}

/// Get a single article (detail shape)
pub async fn get_article(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = ArticleService::new((**pool).clone());
    let article = service.get_article(*article_id).await?;

    Ok(HttpResponse::Ok().json(article))
}

/// Create a new article
pub async fn create_article(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<ArticlePayload>,
) -> Result<HttpResponse> {
    let service = ArticleService::new((**pool).clone());
    let article = service.create_article(user_id.0, req.into_inner()).await?;

    Ok(HttpResponse::Ok().json(article))
}

/// Update an article (owner only)
pub async fn update_article(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<ArticlePayload>,
) -> Result<HttpResponse> {
    let service = ArticleService::new((**pool).clone());
    let article = service
        .update_article(*article_id, user_id.0, req.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(article))
}

/// Delete an article (owner only); cascades to comments and likes
pub async fn delete_article(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = ArticleService::new((**pool).clone());
    service.delete_article(*article_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
