/// Security primitives for article-service
///
/// - `jwt`: validation of access tokens issued by the identity provider
/// - `ownership`: the owner-only authorization gate used by every mutation
pub mod jwt;
pub mod ownership;

pub use ownership::ensure_owner;
