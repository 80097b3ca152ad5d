use thiserror::Error;

/// Rejected boundary input
///
/// Produced by the constructors in `types::internal::item_input` before a
/// request reaches the service layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric field must be a positive integer
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    /// A numeric field exceeds what the store can represent
    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field }
            | Self::NotPositive { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}
