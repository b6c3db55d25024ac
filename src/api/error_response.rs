//! Error responses for the activities API
//!
//! Every failure leaves the service as `{"detail": "..."}` with a status
//! code chosen by [`ErrorResponseExt::status_code`].

use crate::domain::DirectoryError;
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Client-facing detail messages
pub mod details {
    pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
    pub const ALREADY_SIGNED_UP: &str = "Student is already signed up for this activity";
    pub const NOT_SIGNED_UP: &str = "Student is not signed up for this activity";
    pub const ACTIVITY_FULL: &str = "Activity is full";
    pub const INVALID_EMAIL: &str = "Invalid email address";
    pub const ROUTE_NOT_FOUND: &str = "Not Found";
    pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// Standard error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Missing required query parameter: {name}")]
    MissingQueryParameter { name: &'static str },

    #[error("Invalid query string: {reason}")]
    InvalidQuery { reason: String },

    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("No route for {path}")]
    RouteNotFound { path: String },

    #[error("{method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery {
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath {
            reason: rejection.body_text(),
        }
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for DirectoryError {
    fn to_error_response(&self) -> ErrorResponse {
        use DirectoryError::*;

        match self {
            ActivityNotFound { .. } => ErrorResponse::new(details::ACTIVITY_NOT_FOUND),
            AlreadyRegistered { .. } => ErrorResponse::new(details::ALREADY_SIGNED_UP),
            NotRegistered { .. } => ErrorResponse::new(details::NOT_SIGNED_UP),
            ActivityFull { .. } => ErrorResponse::new(details::ACTIVITY_FULL),
            InvalidEmail { .. } => ErrorResponse::new(details::INVALID_EMAIL),
            DuplicateActivity { .. } | InvalidDefinition { .. } => {
                ErrorResponse::new(details::INTERNAL_ERROR)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        use DirectoryError::*;

        match self {
            ActivityNotFound { .. } => StatusCode::NOT_FOUND,
            AlreadyRegistered { .. } | NotRegistered { .. } | ActivityFull { .. } => {
                StatusCode::BAD_REQUEST
            }
            InvalidEmail { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DuplicateActivity { .. } | InvalidDefinition { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorResponseExt for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Directory(e) => e.to_error_response(),
            ApiError::MissingQueryParameter { .. } => ErrorResponse::new(self.to_string()),
            ApiError::InvalidQuery { reason } | ApiError::InvalidPath { reason } => {
                ErrorResponse::new(reason.clone())
            }
            ApiError::RouteNotFound { .. } => ErrorResponse::new(details::ROUTE_NOT_FOUND),
            ApiError::MethodNotAllowed { .. } => ErrorResponse::new(details::METHOD_NOT_ALLOWED),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Directory(e) => e.status_code(),
            ApiError::MissingQueryParameter { .. } | ApiError::InvalidQuery { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        self.to_error_response().into_response_with_status(status)
    }
}
