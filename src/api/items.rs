use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::app_data::AppData;
use crate::errors::ItemsError;
use crate::services::ItemService;
use crate::types::dto::items::{CreateItemRequest, GetItemApiResponse, ItemResponse};
use crate::types::internal::{ItemId, NewItem, SearchQuery};

/// Items API
///
/// Raw input is validated here, once, before any service call.
pub struct ItemsApi {
    item_service: Arc<ItemService>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_service: Arc::clone(&app_data.item_service),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item catalog endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Returns the stored item with its generated id and creation timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemsError> {
        let Json(request) = body;
        let new_item = NewItem::new(request.title, request.description, request.content)?;

        let item = self.item_service.create_item(new_item).await?;

        Ok(Json(ItemResponse::try_from(item)?))
    }

    /// List all items, most recently created first
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_items(&self) -> Result<Json<Vec<ItemResponse>>, ItemsError> {
        let items = self.item_service.get_items().await?;

        Ok(Json(ItemResponse::from_items(items)?))
    }

    /// Search items
    ///
    /// Case-insensitive substring match against title, description and
    /// content. Returns at most `limit` items (default 10), newest first.
    #[oai(path = "/items/search", method = "get", tag = "ApiTags::Items")]
    async fn search_items(
        &self,
        query: Query<String>,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemsError> {
        let search = SearchQuery::new(query.0, limit.0)?;

        let items = self.item_service.search_items(search).await?;

        Ok(Json(ItemResponse::from_items(items)?))
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i64>) -> Result<GetItemApiResponse, ItemsError> {
        let id = ItemId::new(id.0)?;

        match self.item_service.get_item(id).await? {
            Some(item) => Ok(GetItemApiResponse::Ok(Json(ItemResponse::try_from(item)?))),
            None => Ok(GetItemApiResponse::not_found(id.value())),
        }
    }
}
