//! Unified error handling.
//!
//! Route handlers return `Result<T, AppError>`. Failures are logged via
//! `tracing` and reach the user only as a generic static message - no
//! structured error detail crosses the render boundary.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// State store write failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request error");

        let (status, message) = match &self {
            Self::Catalog(_) => (
                StatusCode::BAD_GATEWAY,
                "Error loading catalog data. Please try again later.",
            ),
            Self::Store(_) | Self::Template(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Not found."),
        };

        (
            status,
            Html(format!("<p class=\"error-message\">{message}</p>")),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                path: "products".to_string(),
            })),
            StatusCode::BAD_GATEWAY
        );
    }
}
