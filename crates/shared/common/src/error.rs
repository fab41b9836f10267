//! Unified error handling.
//!
//! Provides a single error type that renders as a response envelope when it
//! reaches the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::messages::INTERNAL_SERVER_ERROR;
use domain::{DomainError, Envelope, ResponseCode};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Caller errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    // Storage backends
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "document-store")]
    #[error("Document store error: {0}")]
    DocumentStore(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "document-store")]
            AppError::DocumentStore(_) => "DOCUMENT_STORE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Envelope code the error is reported with
    pub fn response_code(&self) -> ResponseCode {
        match self {
            AppError::Conflict(_) => ResponseCode::Conflict,
            _ => ResponseCode::Error,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidArgument(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                INTERNAL_SERVER_ERROR.to_string()
            }
            #[cfg(feature = "document-store")]
            AppError::DocumentStore(e) => {
                tracing::error!("Document store error: {:?}", e);
                INTERNAL_SERVER_ERROR.to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                INTERNAL_SERVER_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_SERVER_ERROR.to_string()
            }
        }
    }

    /// Render the error as a payload-less envelope
    pub fn to_envelope<T>(&self) -> Envelope<T> {
        let message = self.user_message();
        match self.response_code() {
            ResponseCode::Conflict => Envelope::conflict(message),
            _ => Envelope::error(message),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body: Envelope<()> = self.to_envelope();

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_renders_error_envelope() {
        let err = AppError::invalid_argument("Operation aborted due to invalid input parameters.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let envelope: Envelope<()> = err.to_envelope();
        assert_eq!(envelope.code(), ResponseCode::Error);
        assert_eq!(
            envelope.message(),
            "Operation aborted due to invalid input parameters."
        );
    }

    #[test]
    fn test_conflict_keeps_code() {
        let err = AppError::conflict("taken");
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_envelope::<()>().code(), ResponseCode::Conflict);
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::internal("connection reset by peer");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: AppError = DomainError::invalid_argument("blank id").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_envelope::<()>().code(), ResponseCode::Error);
        assert!(matches!(err, AppError::InvalidArgument(msg) if msg == "blank id"));
    }

    #[test]
    fn test_validation_and_conflict_statuses() {
        assert_eq!(AppError::validation("missing").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::validation("missing").code(), "VALIDATION_ERROR");
        assert_eq!(
            AppError::conflict("taken").response_code(),
            ResponseCode::Conflict
        );
        assert_eq!(
            AppError::internal("boom").response_code(),
            ResponseCode::Error
        );
    }
}
