use thiserror::Error;

pub mod database;

pub use database::DatabaseError;

/// Internal error type for store and service operations
///
/// Infrastructure failures only: a missing item is not an error and is
/// returned as `Ok(None)` by the stores.
/// Not exposed via API - endpoints must convert to `ItemsError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }
}
