use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::config::database::{begin_transaction, commit_transaction};
use crate::errors::InternalError;
use crate::stores::item_search::{fold_case, search_condition};
use crate::types::db::item::{self, ActiveModel, Entity as Items};
use crate::types::db::Item;
use crate::types::internal::{ItemId, NewItem, SearchQuery};

/// ItemStore owns the items table: id assignment, creation timestamps and
/// every read path.
///
/// Holds the injected connection pool; no global handle is consulted.
#[derive(Clone)]
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new item
    ///
    /// The database assigns `id`. `created_at` is the current time, raised to
    /// the newest stored timestamp if the clock is behind it, so creation
    /// times never decrease in insertion order.
    ///
    /// # Returns
    /// * `Ok(Item)` - The stored row
    /// * `Err(InternalError)` - Database error
    pub async fn insert(&self, new_item: NewItem) -> Result<Item, InternalError> {
        let txn = begin_transaction(&self.db).await?;

        let newest = Self::newest_created_at(&txn).await?;
        let now = Utc::now().timestamp_micros();
        let created_at = newest.map_or(now, |newest| newest.max(now));

        let (title, description, content) = new_item.into_parts();
        let item = item_row(title, description, content, created_at)
            .insert(&txn)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        commit_transaction(txn).await?;

        Ok(item)
    }

    /// Get an item by id
    ///
    /// # Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - No item has this id
    /// * `Err(InternalError)` - Database error
    pub async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, InternalError> {
        Items::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item_by_id", e))
    }

    /// List every item, most recently created first
    pub async fn list_all(&self) -> Result<Vec<Item>, InternalError> {
        Items::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Items whose title, description or content contains the query
    ///
    /// Ordered like [`ItemStore::list_all`] and truncated to the query limit,
    /// so the most recent matches are kept.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Item>, InternalError> {
        Items::find()
            .filter(search_condition(query.query()))
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .limit(query.limit())
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("search_items", e))
    }

    async fn newest_created_at(conn: &impl ConnectionTrait) -> Result<Option<i64>, InternalError> {
        let newest = Items::find()
            .order_by_desc(item::Column::CreatedAt)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_newest_created_at", e))?;

        Ok(newest.map(|item| item.created_at))
    }
}

/// New row with its folded search columns derived from the display text
fn item_row(
    title: String,
    description: Option<String>,
    content: String,
    created_at: i64,
) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        title_search: Set(fold_case(&title)),
        description_search: Set(description.as_deref().map(fold_case)),
        content_search: Set(fold_case(&content)),
        title: Set(title),
        description: Set(description),
        content: Set(content),
        created_at: Set(created_at),
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
