/// Like handlers - HTTP endpoint for toggling likes
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::LikeService;

/// Toggle the caller's like on an article. The response reports the
/// membership state after the call: `{"liked": true}` when the like was
/// added, `{"liked": false}` when it was removed.
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    article_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let toggle = service.toggle_like(*article_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(toggle))
}
