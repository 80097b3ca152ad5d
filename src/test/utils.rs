// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::services::ItemService;
use crate::stores::ItemStore;
use crate::types::db::Item;
use crate::types::internal::NewItem;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a test database and an item store on top of it
///
/// The connection is returned too so tests can write rows directly.
pub async fn setup_test_item_store() -> (DatabaseConnection, ItemStore) {
    let db = setup_test_db().await;
    let store = ItemStore::new(db.clone());
    (db, store)
}

pub async fn setup_test_item_service() -> (DatabaseConnection, ItemService) {
    let (db, store) = setup_test_item_store().await;
    (db, ItemService::new(Arc::new(store)))
}

pub fn new_item(title: &str, description: Option<&str>, content: &str) -> NewItem {
    NewItem::new(
        title.to_string(),
        description.map(str::to_string),
        content.to_string(),
    )
    .expect("Invalid test item")
}

/// Inserts the four reference catalog items, oldest first
pub async fn seed_catalog(store: &ItemStore) -> Vec<Item> {
    let catalog = [
        (
            "JavaScript Guide",
            Some("Learn JavaScript programming"),
            "This is a comprehensive guide to JavaScript programming with examples and best practices.",
        ),
        (
            "Python Tutorial",
            Some("Introduction to Python"),
            "Python is a versatile programming language used for web development, data science, and automation.",
        ),
        (
            "Database Design",
            None,
            "Learn how to design efficient databases with proper normalization and indexing strategies.",
        ),
        (
            "Web Development",
            Some("Frontend and backend development"),
            "Complete guide covering HTML, CSS, JavaScript, and server-side programming concepts.",
        ),
    ];

    let mut items = Vec::with_capacity(catalog.len());
    for (title, description, content) in catalog {
        let item = store
            .insert(new_item(title, description, content))
            .await
            .expect("Failed to seed catalog item");
        items.push(item);
    }
    items
}
