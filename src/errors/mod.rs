// Errors layer - Error type definitions
pub mod api;
pub mod internal;
pub mod validation;

// Re-exports for convenience
pub use api::ItemsError;
pub use internal::{DatabaseError, InternalError};
pub use validation::ValidationError;
