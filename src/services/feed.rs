/// Feed service - articles authored by accounts the caller follows
///
/// The feed is the set `{ article : article.owner ∈ caller.following }`,
/// expressed as a join against the follows table. A caller who follows
/// nobody gets an empty feed, never the whole store; the join gives that
/// branch for free, unlike an incrementally built OR-filter which would
/// degenerate to an always-true predicate on an empty following set.
///
/// The query is constructed fresh per request; no query state is shared
/// across requests.
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::ArticleSummary;

pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Compute the caller's feed as list-shape summaries, ordered
    /// consistently with the article listing. Authentication is enforced
    /// upstream; this service only ever sees a resolved principal.
    pub async fn get_feed(&self, principal: Uuid) -> Result<Vec<ArticleSummary>> {
        let summaries = sqlx::query_as::<_, ArticleSummary>(
            r#"
            SELECT a.id,
                   a.title,
                   a.image,
                   u.email AS "user",
                   (SELECT COUNT(*) FROM likes l WHERE l.article_id = a.id) AS likes_count,
                   (SELECT COUNT(*) FROM comments c WHERE c.article_id = a.id) AS comment_count
            FROM articles a
            JOIN follows f ON f.followee_id = a.user_id
            JOIN users u ON u.id = a.user_id
            WHERE f.follower_id = $1
            ORDER BY a.created_at ASC
            "#,
        )
        .bind(principal)
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }
}
