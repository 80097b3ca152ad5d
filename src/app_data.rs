use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::ItemService;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// Created once in main.rs and shared with the API layer.
///
/// ```text
/// main.rs
///   ↓ init_database() + migrate_database()
/// AppData::init(db)
///   ├─ db (DatabaseConnection)
///   └─ item_service (Arc<ItemService>)
///        └─ ItemStore (owned by the service)
///   ↓ wrapped in Arc<AppData>
///   ├─ ItemsApi::new(app_data)
///   └─ HealthApi::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_service: Arc<ItemService>,
}

impl AppData {
    /// The connection should already be migrated
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::info!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new(db.clone()));
        let item_service = Arc::new(ItemService::new(item_store));

        tracing::info!("AppData initialization complete");

        Self {
            db,
            item_service,
        }
    }
}
