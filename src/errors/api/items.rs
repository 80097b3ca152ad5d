use crate::errors::internal::InternalError;
use crate::errors::validation::ValidationError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Failure responses shared by the item endpoints
///
/// A missing item is not listed here: `GET /items/{id}` reports it through
/// its own response enum.
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// Request input failed validation
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemsError {
    /// Create a BadRequest error
    pub fn validation_failed(reason: String) -> Self {
        ItemsError::BadRequest(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: reason,
            status_code: 400,
        }))
    }

    /// Create an InternalError; the message never carries storage details
    pub fn internal_error() -> Self {
        ItemsError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ItemsError::BadRequest(json) | ItemsError::InternalError(json) => json.0.status_code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ItemsError::BadRequest(json) | ItemsError::InternalError(json) => &json.0.message,
        }
    }
}

impl From<ValidationError> for ItemsError {
    fn from(err: ValidationError) -> Self {
        ItemsError::validation_failed(err.to_string())
    }
}

impl From<InternalError> for ItemsError {
    fn from(err: InternalError) -> Self {
        tracing::error!("Item operation failed: {}", err);
        ItemsError::internal_error()
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.status_code())
    }
}
