/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::CommentService;
use crate::validators::CommentPayload;

/// List comments of an article (comment shape)
pub async fn list_comments(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service.list_comments(*article_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Create a comment on an article
pub async fn create_comment(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CommentPayload>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .create_comment(*article_id, user_id.0, req.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Update a comment (owner only)
pub async fn update_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CommentPayload>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .update_comment(*comment_id, user_id.0, req.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment (owner only)
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    service.delete_comment(*comment_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
