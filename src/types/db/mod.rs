// Database entities - SeaORM models
pub mod item;

pub use item::Model as Item;
