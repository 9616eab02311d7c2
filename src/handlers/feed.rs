/// Feed handler - articles from followed accounts
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use tracing::debug;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::FeedService;

/// Get the caller's feed. Requires authentication; the `UserId` extractor
/// rejects unauthenticated requests before this handler runs.
pub async fn get_feed(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    debug!("Feed request: user={}", user_id.0);

    let service = FeedService::new((**pool).clone());
    let feed = service.get_feed(user_id.0).await?;

    Ok(HttpResponse::Ok().json(feed))
}
