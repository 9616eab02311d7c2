/// HTTP handlers for article-service endpoints
///
/// This module contains handlers for:
/// - Articles: list, detail, create, update, delete
/// - Comments: list and create per article, update and delete per comment
/// - Likes: toggle a like on an article
/// - Feed: articles from followed accounts
pub mod articles;
pub mod comments;
pub mod feed;
pub mod likes;

// Re-export handler functions at module level
pub use articles::{create_article, delete_article, get_article, list_articles, update_article};
pub use comments::{create_comment, delete_comment, list_comments, update_comment};
pub use feed::get_feed;
pub use likes::toggle_like;
