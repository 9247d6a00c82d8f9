//! # API Errors
//!
//! Every failure leaves the process running and is rendered as an
//! `errors` document.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookshelf_core::ServiceError;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::document::{DecodeError, ErrorDocument, MEDIA_TYPE};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request body is not a valid resource document
    Validation,

    /// No book matches the requested id (kept verbatim from the path)
    NotFound(String),

    /// Store or runtime failure
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation => "ValidationError",
            ApiError::NotFound(_) => "NotFound",
            ApiError::Internal => "InternalError",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation => "Given request body was invalid".to_string(),
            ApiError::NotFound(id) => format!("Book with id {id} not found"),
            ApiError::Internal => "Internal server error".to_string(),
        }
    }

    pub fn to_document(&self) -> ErrorDocument {
        ErrorDocument::single(self.title(), self.status_code().as_u16(), self.detail())
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.detail())
    }
}

impl Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => ApiError::NotFound(id.to_string()),
            ServiceError::Repo(err) => {
                error!("event=store_failure module=http status=error error={err}");
                ApiError::Internal
            }
        }
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        debug!("event=decode_failure module=http status=rejected error={err}");
        ApiError::Validation
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_document());
        (status, [(header::CONTENT_TYPE, MEDIA_TYPE)], body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{BookId, RepoError};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_service_error_mapping() {
        assert_eq!(
            ApiError::from(ServiceError::NotFound(BookId::new(5))),
            ApiError::NotFound("5".to_string())
        );
        assert_eq!(
            ApiError::from(ServiceError::Repo(RepoError::InvalidData("x".to_string()))),
            ApiError::Internal
        );
    }

    #[test]
    fn test_document_shape() {
        let doc = ApiError::NotFound("abc".to_string()).to_document();
        assert_eq!(doc.errors.len(), 1);
        assert_eq!(doc.errors[0].title, "NotFound");
        assert_eq!(doc.errors[0].status, "404");
        assert_eq!(doc.errors[0].detail, "Book with id abc not found");
    }

    #[test]
    fn test_into_response_sets_status_and_media_type() {
        let response = ApiError::Validation.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            MEDIA_TYPE
        );
    }
}
