/// Error types for Article Service
///
/// Every failure a request can hit maps onto one of these variants, which in
/// turn map onto HTTP responses for API clients. All errors are terminal for
/// the current request; nothing here is retried internally.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for article-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request payload failed field validation
    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    /// Referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is authenticated but not the owner of the resource
    #[error("Forbidden: you do not have permission to perform this action")]
    Forbidden,

    /// Missing or invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Validation failures carry a per-field error map; everything else is
        // a flat message. Forbidden deliberately stays generic so a non-owner
        // learns nothing beyond the denial itself.
        let body = match self {
            AppError::Validation(errors) => serde_json::json!({
                "error": "Validation failed",
                "fields": errors.field_errors()
                    .iter()
                    .map(|(field, errs)| {
                        let messages: Vec<String> = errs
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect::<std::collections::HashMap<_, _>>(),
                "status": status.as_u16(),
            }),
            other => serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("article".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Unauthorized("missing token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_forbidden_message_is_generic() {
        // The denial must not leak resource details to non-owners.
        let msg = AppError::Forbidden.to_string();
        assert!(!msg.contains("article"));
        assert!(!msg.contains("comment"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(max = 2, message = "too long"))]
            title: String,
        }

        let err = Probe {
            title: "abc".into(),
        }
        .validate()
        .unwrap_err();

        let app_err = AppError::from(err);
        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);
    }
}
