// Validated inputs handed from the API layer to services
pub mod item_input;

pub use item_input::{DEFAULT_SEARCH_LIMIT, ItemId, NewItem, SearchQuery};
