/// Article Service Library
///
/// Social content service: authenticated users post articles, comment on
/// them, like them, and read a feed of articles from accounts they follow.
/// User registration, authentication, and session issuance live in the
/// identity provider; this service only validates its tokens and reads the
/// user and follow tables it owns.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for articles, comments, and projections
/// - `services`: Business logic layer
/// - `db`: Connection pool and migrations
/// - `middleware`: JWT authentication and request timing
/// - `security`: Token validation and the ownership gate
/// - `validators`: Request payload validation
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
