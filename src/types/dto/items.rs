use chrono::SecondsFormat;
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};

use crate::errors::InternalError;
use crate::types::db::Item;
use crate::types::dto::common::ErrorResponse;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Title of the item (at least 1 character)
    pub title: String,

    /// Optional description of the item; `null` and a missing field are equivalent
    pub description: Option<String>,

    /// Searchable body text (at least 1 character)
    pub content: String,
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ItemResponse {
    /// Identifier assigned by the store
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    pub content: String,

    /// Timestamp when the item was created (RFC 3339, microsecond precision)
    pub created_at: String,
}

impl TryFrom<Item> for ItemResponse {
    type Error = InternalError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        let created_at = item
            .created_at_utc()?
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        Ok(Self {
            id: item.id,
            title: item.title,
            description: item.description,
            content: item.content,
            created_at,
        })
    }
}

impl ItemResponse {
    pub fn from_items(items: Vec<Item>) -> Result<Vec<Self>, InternalError> {
        items.into_iter().map(Self::try_from).collect()
    }
}

#[derive(ApiResponse, Debug)]
pub enum GetItemApiResponse {
    /// Item found
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),

    /// No item has the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

impl GetItemApiResponse {
    pub fn not_found(id: i64) -> Self {
        GetItemApiResponse::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("No such item: {}", id),
            status_code: 404,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_formats_created_at() {
        let item = Item {
            id: 7,
            title: "Database Design".to_string(),
            description: None,
            content: "Normalization".to_string(),
            title_search: "database design".to_string(),
            description_search: None,
            content_search: "normalization".to_string(),
            created_at: 1_700_000_000_000_001,
        };

        let response = ItemResponse::try_from(item).unwrap();

        assert_eq!(response.id, 7);
        assert_eq!(response.description, None);
        assert_eq!(response.created_at, "2023-11-14T22:13:20.000001Z");
    }

    #[test]
    fn test_from_items_propagates_parse_error() {
        let items = vec![Item {
            id: 1,
            title: "Broken".to_string(),
            description: None,
            content: "Broken".to_string(),
            title_search: "broken".to_string(),
            description_search: None,
            content_search: "broken".to_string(),
            created_at: i64::MIN,
        }];

        assert!(ItemResponse::from_items(items).is_err());
    }
}
