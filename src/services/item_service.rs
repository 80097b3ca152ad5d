use std::sync::Arc;

use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::db::Item;
use crate::types::internal::{ItemId, NewItem, SearchQuery};

/// Item access operations exposed to the API layer
///
/// Inputs arrive already validated; every operation is a single call into
/// the store and storage failures are returned unchanged.
pub struct ItemService {
    item_store: Arc<ItemStore>,
}

impl ItemService {
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    pub async fn create_item(&self, new_item: NewItem) -> Result<Item, InternalError> {
        let item = self.item_store.insert(new_item).await?;

        tracing::info!(item_id = item.id, "Item created");

        Ok(item)
    }

    /// `Ok(None)` when no item has this id
    pub async fn get_item(&self, id: ItemId) -> Result<Option<Item>, InternalError> {
        let item = self.item_store.get_by_id(id).await?;

        if item.is_none() {
            tracing::debug!(item_id = id.value(), "Item not found");
        }

        Ok(item)
    }

    pub async fn get_items(&self) -> Result<Vec<Item>, InternalError> {
        self.item_store.list_all().await
    }

    pub async fn search_items(&self, query: SearchQuery) -> Result<Vec<Item>, InternalError> {
        let items = self.item_store.search(&query).await?;

        tracing::debug!(
            query = query.query(),
            limit = query.limit(),
            matches = items.len(),
            "Item search completed"
        );

        Ok(items)
    }
}
