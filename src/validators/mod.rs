/// Input validation for article and comment payloads
///
/// Request bodies derive `Validate` and are checked in the service layer.
/// On updates the ownership gate runs first: a non-owner is told Forbidden
/// no matter what the payload looks like. Length limits count characters,
/// matching the column definitions.
use serde::Deserialize;
use validator::Validate;

/// Body for creating or fully updating an article. Updates re-validate the
/// same way creation does; the owner is taken from the authenticated
/// principal, never from the payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ArticlePayload {
    #[validate(length(min = 1, max = 50, message = "title is required and at most 50 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub image: Option<String>,
}

/// Body for creating or updating a comment. The article reference comes from
/// the URL path and cannot be changed through this payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentPayload {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, content: &str) -> ArticlePayload {
        ArticlePayload {
            title: title.to_string(),
            content: content.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_title_at_limit_is_valid() {
        assert!(article(&"a".repeat(50), "body").validate().is_ok());
    }

    #[test]
    fn test_title_over_limit_is_rejected() {
        let err = article(&"a".repeat(51), "body").validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_title_limit_counts_characters_not_bytes() {
        // 50 multibyte characters must pass even though the byte length
        // is well over 50.
        let title = "한".repeat(50);
        assert!(title.len() > 50);
        assert!(article(&title, "body").validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = article("", "body").validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let err = article("hello", "").validate().unwrap_err();
        assert!(err.field_errors().contains_key("content"));
    }

    #[test]
    fn test_comment_requires_content() {
        let payload = CommentPayload {
            content: String::new(),
        };
        assert!(payload.validate().is_err());

        let payload = CommentPayload {
            content: "nice".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
