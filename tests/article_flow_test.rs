//! Integration tests: article, comment, like, and feed flows
//!
//! Exercises the service layer against a real Postgres database.
//!
//! Coverage:
//! - Owner-only mutation of articles and comments
//! - Cascade deletion of comments and like rows with the article
//! - Like toggle semantics and count consistency
//! - Feed membership driven by the follows table
//!
//! Architecture:
//! - Uses testcontainers for PostgreSQL (run with `cargo test -- --ignored`
//!   on a machine with Docker)
//! - Calls services directly; HTTP-layer auth is covered by unit tests

mod common;

use article_service::error::AppError;
use article_service::services::{ArticleService, CommentService, FeedService, LikeService};
use article_service::validators::{ArticlePayload, CommentPayload};
use common::{create_follow, create_user, setup_test_db};
use uuid::Uuid;

fn article_payload(title: &str, content: &str) -> ArticlePayload {
    ArticlePayload {
        title: title.to_string(),
        content: content.to_string(),
        image: None,
    }
}

fn comment_payload(content: &str) -> CommentPayload {
    CommentPayload {
        content: content.to_string(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_non_owner_mutation_is_forbidden() {
    let pool = setup_test_db().await.expect("db setup");
    let owner = create_user(&pool, "owner@example.com").await;
    let intruder = create_user(&pool, "intruder@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let article = articles
        .create_article(owner, article_payload("mine", "hands off"))
        .await
        .expect("create article");

    // Valid payload, wrong principal: always Forbidden.
    let update = articles
        .update_article(article.id, intruder, article_payload("stolen", "rewritten"))
        .await;
    assert!(matches!(update, Err(AppError::Forbidden)));

    let delete = articles.delete_article(article.id, intruder).await;
    assert!(matches!(delete, Err(AppError::Forbidden)));

    let comments = CommentService::new(pool.clone());
    let comment = comments
        .create_comment(article.id, owner, comment_payload("first"))
        .await
        .expect("create comment");

    let update = comments.update_comment(comment.id, intruder, comment_payload("defaced")).await;
    assert!(matches!(update, Err(AppError::Forbidden)));

    let delete = comments.delete_comment(comment.id, intruder).await;
    assert!(matches!(delete, Err(AppError::Forbidden)));

    // The owner still succeeds after all the denials.
    articles
        .update_article(article.id, owner, article_payload("still mine", "hands off"))
        .await
        .expect("owner update");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_ids_are_not_found() {
    let pool = setup_test_db().await.expect("db setup");
    let user = create_user(&pool, "user@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let likes = LikeService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let ghost = Uuid::new_v4();

    assert!(matches!(
        articles.get_article(ghost).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        articles.update_article(ghost, user, article_payload("t", "c")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        articles.delete_article(ghost, user).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        likes.toggle_like(ghost, user).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        comments.list_comments(ghost).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        comments.create_comment(ghost, user, comment_payload("hello")).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_article_deletion_cascades() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_user(&pool, "author@example.com").await;
    let reader = create_user(&pool, "reader@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let likes = LikeService::new(pool.clone());

    let article = articles
        .create_article(author, article_payload("doomed", "short-lived"))
        .await
        .expect("create article");

    comments
        .create_comment(article.id, reader, comment_payload("nice post"))
        .await
        .expect("create comment");
    likes
        .toggle_like(article.id, reader)
        .await
        .expect("toggle like");

    articles
        .delete_article(article.id, author)
        .await
        .expect("delete article");

    // Listing comments of the deleted article is NotFound, not an empty list.
    assert!(matches!(
        comments.list_comments(article.id).await,
        Err(AppError::NotFound(_))
    ));

    // No orphaned child rows survive the cascade.
    let comment_rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(article.id)
            .fetch_one(&pool)
            .await
            .expect("count comments");
    assert_eq!(comment_rows, 0);

    let like_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE article_id = $1")
        .bind(article.id)
        .fetch_one(&pool)
        .await
        .expect("count likes");
    assert_eq!(like_rows, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_like_toggle_flips_membership() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_user(&pool, "author@example.com").await;
    let fan = create_user(&pool, "fan@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let likes = LikeService::new(pool.clone());

    let article = articles
        .create_article(author, article_payload("likeable", "content"))
        .await
        .expect("create article");

    let before = likes.like_count(article.id).await.expect("count");
    assert_eq!(before, 0);

    let first = likes.toggle_like(article.id, fan).await.expect("toggle");
    assert!(first.liked);
    assert_eq!(likes.like_count(article.id).await.expect("count"), 1);

    let second = likes.toggle_like(article.id, fan).await.expect("toggle");
    assert!(!second.liked);
    assert_eq!(likes.like_count(article.id).await.expect("count"), before);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_feed_is_empty_without_follows() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_user(&pool, "author@example.com").await;
    let loner = create_user(&pool, "loner@example.com").await;

    let articles = ArticleService::new(pool.clone());
    articles
        .create_article(author, article_payload("unseen", "exists but not followed"))
        .await
        .expect("create article");

    // Empty following set means an empty feed, never the whole store.
    let feed = FeedService::new(pool.clone())
        .get_feed(loner)
        .await
        .expect("feed");
    assert!(feed.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_feed_contains_only_followed_authors() {
    let pool = setup_test_db().await.expect("db setup");
    let a = create_user(&pool, "a@example.com").await;
    let b = create_user(&pool, "b@example.com").await;
    let c = create_user(&pool, "c@example.com").await;
    let caller = create_user(&pool, "caller@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let by_a = articles
        .create_article(a, article_payload("from a", "x"))
        .await
        .expect("create");
    let by_b = articles
        .create_article(b, article_payload("from b", "y"))
        .await
        .expect("create");
    articles
        .create_article(c, article_payload("from c", "z"))
        .await
        .expect("create");

    create_follow(&pool, caller, a).await;
    create_follow(&pool, caller, b).await;

    let feed = FeedService::new(pool.clone())
        .get_feed(caller)
        .await
        .expect("feed");

    let ids: Vec<Uuid> = feed.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&by_a.id));
    assert!(ids.contains(&by_b.id));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_follow_makes_article_visible_in_feed() {
    let pool = setup_test_db().await.expect("db setup");
    let u = create_user(&pool, "u@example.com").await;
    let v = create_user(&pool, "v@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let feed = FeedService::new(pool.clone());

    let x = articles
        .create_article(u, article_payload("x", "from u"))
        .await
        .expect("create");

    assert!(feed.get_feed(v).await.expect("feed").is_empty());

    create_follow(&pool, v, u).await;

    let visible = feed.get_feed(v).await.expect("feed");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, x.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_counts_match_projections() {
    let pool = setup_test_db().await.expect("db setup");
    let author = create_user(&pool, "author@example.com").await;
    let fan_one = create_user(&pool, "one@example.com").await;
    let fan_two = create_user(&pool, "two@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let likes = LikeService::new(pool.clone());

    let article = articles
        .create_article(author, article_payload("counted", "content"))
        .await
        .expect("create");

    likes.toggle_like(article.id, fan_one).await.expect("like");
    likes.toggle_like(article.id, fan_two).await.expect("like");
    comments
        .create_comment(article.id, fan_one, comment_payload("first"))
        .await
        .expect("comment");

    let summaries = articles.list_articles().await.expect("list");
    let summary = summaries
        .iter()
        .find(|s| s.id == article.id)
        .expect("summary present");

    assert_eq!(summary.likes_count, 2);
    assert_eq!(summary.comment_count, 1);
    assert_eq!(summary.user, "author@example.com");

    let detail = articles.get_article(article.id).await.expect("detail");
    assert_eq!(detail.liked_by.len() as i64, summary.likes_count);
    assert_eq!(detail.comments.len() as i64, summary.comment_count);
    assert_eq!(
        likes.like_count(article.id).await.expect("count"),
        summary.likes_count
    );

    // Labels, not raw ids.
    assert!(detail.liked_by.contains(&"one@example.com".to_string()));
    assert!(detail.liked_by.contains(&"two@example.com".to_string()));
    assert_eq!(detail.comments[0].user, "one@example.com");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_refreshes_timestamp_and_keeps_owner() {
    let pool = setup_test_db().await.expect("db setup");
    let owner = create_user(&pool, "owner@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let article = articles
        .create_article(owner, article_payload("v1", "original"))
        .await
        .expect("create");

    let updated = articles
        .update_article(article.id, owner, article_payload("v2", "revised"))
        .await
        .expect("update");

    assert_eq!(updated.user_id, article.user_id);
    assert_eq!(updated.created_at, article.created_at);
    assert!(updated.updated_at >= article.updated_at);
    assert_eq!(updated.title, "v2");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_invalid_payload_is_rejected_on_write() {
    let pool = setup_test_db().await.expect("db setup");
    let owner = create_user(&pool, "owner@example.com").await;

    let articles = ArticleService::new(pool.clone());

    let long_title = "a".repeat(51);
    let create = articles
        .create_article(owner, article_payload(&long_title, "body"))
        .await;
    assert!(matches!(create, Err(AppError::Validation(_))));

    // Nothing was persisted.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(&pool)
        .await
        .expect("count articles");
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ownership_gate_runs_before_validation() {
    let pool = setup_test_db().await.expect("db setup");
    let owner = create_user(&pool, "owner@example.com").await;
    let intruder = create_user(&pool, "intruder@example.com").await;

    let articles = ArticleService::new(pool.clone());
    let article = articles
        .create_article(owner, article_payload("mine", "body"))
        .await
        .expect("create article");

    // A non-owner is told Forbidden even when the payload would also have
    // failed validation.
    let update = articles
        .update_article(article.id, intruder, article_payload("", ""))
        .await;
    assert!(matches!(update, Err(AppError::Forbidden)));

    // The same broken payload from the owner fails validation instead.
    let update = articles
        .update_article(article.id, owner, article_payload("", ""))
        .await;
    assert!(matches!(update, Err(AppError::Validation(_))));
}
