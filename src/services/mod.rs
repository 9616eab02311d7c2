/// Business logic layer for article-service
///
/// This module provides high-level operations:
/// - Article service: article CRUD with owner-gated mutation
/// - Comment service: comments scoped to an article, owner-gated mutation
/// - Like service: atomic like toggling and counts
/// - Feed service: articles authored by accounts the caller follows
pub mod articles;
pub mod comments;
pub mod feed;
pub mod likes;

// Re-export commonly used services
pub use articles::ArticleService;
pub use comments::CommentService;
pub use feed::FeedService;
pub use likes::LikeService;
