// Request and response models exposed through the OpenAPI schema
pub mod common;
pub mod items;
