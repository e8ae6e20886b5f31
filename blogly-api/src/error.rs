/// Error handling for the Blogly server
///
/// Handlers return `AppResult<T>`; any `AppError` becomes an HTML error page
/// with the matching status code.
///
/// | Variant           | Status |
/// |-------------------|--------|
/// | `NotFound`        | 404    |
/// | `ValidationError` | 400    |
/// | `Conflict`        | 409    |
/// | `InternalError`   | 500    |

use crate::views;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use blogly_shared::models::{post::PostError, tag::TAG_NAME_CONSTRAINT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handler result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Unified handler error type
#[derive(Debug)]
pub enum AppError {
    /// Referenced row does not exist (404)
    NotFound(String),

    /// Required field missing or malformed (400)
    ValidationError(Vec<ValidationErrorDetail>),

    /// Uniqueness violation, e.g. duplicate tag name (409)
    Conflict(String),

    /// Anything else (500); details are logged, not shown
    InternalError(String),
}

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) => (msg, Vec::new()),
            AppError::ValidationError(errors) => {
                ("Please correct the highlighted fields".to_string(), errors)
            }
            AppError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                ("An internal error occurred".to_string(), Vec::new())
            }
        };

        (status, views::error_page(status, &message, &details)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.constraint() == Some(TAG_NAME_CONSTRAINT) {
                    return AppError::Conflict("A tag with that name already exists".to_string());
                }
                if db_err.is_unique_violation() {
                    return AppError::Conflict(format!("Duplicate value: {}", db_err.message()));
                }
                // Referenced row removed between lookup and write
                if db_err.is_foreign_key_violation() {
                    return AppError::NotFound("Referenced resource not found".to_string());
                }

                AppError::InternalError(format!("Database error: {}", db_err))
            }
            _ => AppError::InternalError(format!("Database error: {}", err)),
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::UnknownTag(name) => AppError::NotFound(format!("Tag '{}' not found", name)),
            PostError::Database(err) => err.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut errors: Vec<ValidationErrorDetail> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        // HashMap order is arbitrary
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Person 7".to_string());
        assert_eq!(err.to_string(), "Not found: Person 7");

        let err = AppError::Conflict("dup".to_string());
        assert_eq!(err.to_string(), "Conflict: dup");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::ValidationError(vec![]).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict(String::new()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InternalError(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_unknown_tag_maps_to_404() {
        let err: AppError = PostError::UnknownTag("sky".to_string()).into();
        match err {
            AppError::NotFound(msg) => assert!(msg.contains("sky")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_map_to_details() {
        let sample = Sample { name: String::new() };
        let err: AppError = sample.validate().unwrap_err().into();

        match err {
            AppError::ValidationError(details) => {
                assert_eq!(
                    details,
                    vec![ValidationErrorDetail {
                        field: "name".to_string(),
                        message: "Name is required".to_string(),
                    }]
                );
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_response_status() {
        let response = AppError::Conflict("dup".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
