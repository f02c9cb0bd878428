use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;
use utoipa::ToSchema;

/// API Error surfaced to HTTP callers
///
/// Only malformed caller input is reported with its own message. Everything
/// else collapses to a generic 500 body and is logged in full.
#[derive(Error, Debug)]
pub enum ApiError {
    // Client errors 4xxx
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors 5xxx
    #[error("Configuration not loaded")]
    ConfigurationMissing,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Helper to create validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Helper to create invalid data error
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Helper to create internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// Error code used in logs
    pub fn error_code(&self) -> i32 {
        match self {
            Self::ValidationError(_) => 4001,
            Self::InvalidInput(_) => 4002,
            Self::ConfigurationMissing => 5001,
            Self::InternalError(_) => 5002,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.error_code() {
            4001..=4999 => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller
    pub fn public_message(&self) -> String {
        match self {
            Self::ValidationError(msg) => msg.clone(),
            Self::InvalidInput(_) => self.to_string(),
            Self::ConfigurationMissing => self.to_string(),
            Self::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", self.error_code(), self);
        } else {
            tracing::debug!("Rejected request ({}): {}", self.error_code(), self);
        }

        let response = ApiErrorResponse { error: self.public_message() };

        (status, Json(response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Turn a panicking handler into the generic 500 body
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::internal_error(format!("handler panicked: {}", details)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request_with_verbatim_message() {
        let err = ApiError::validation_error("Message is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Message is required");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::internal_error("secret stack trace");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_configuration_missing_message() {
        let err = ApiError::ConfigurationMissing;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Configuration not loaded");
    }

    #[tokio::test]
    async fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }
}
