// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use itemsearch_backend::AppData;
use itemsearch_backend::api::create_app;
use migration::{Migrator, MigratorTrait};
use poem::Endpoint;
use poem::test::TestClient;
use sea_orm::{Database, DatabaseConnection};
use serde_json::json;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates the full HTTP application on a fresh database
pub async fn setup_test_client() -> (DatabaseConnection, TestClient<impl Endpoint>) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db.clone()));
    let client = TestClient::new(create_app(app_data, "http://localhost:2022".to_string()));
    (db, client)
}

/// Creates an item through the API and returns its id
pub async fn create_item<E: Endpoint>(
    client: &TestClient<E>,
    title: &str,
    description: Option<&str>,
    content: &str,
) -> i64 {
    let resp = client
        .post("/api/items")
        .body_json(&json!({
            "title": title,
            "description": description,
            "content": content,
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    resp.json().await.value().object().get("id").i64()
}

/// Creates the four reference catalog items, oldest first
pub async fn seed_catalog<E: Endpoint>(client: &TestClient<E>) {
    create_item(
        client,
        "JavaScript Guide",
        Some("Learn JavaScript programming"),
        "This is a comprehensive guide to JavaScript programming with examples and best practices.",
    )
    .await;
    create_item(
        client,
        "Python Tutorial",
        Some("Introduction to Python"),
        "Python is a versatile programming language used for web development, data science, and automation.",
    )
    .await;
    create_item(
        client,
        "Database Design",
        None,
        "Learn how to design efficient databases with proper normalization and indexing strategies.",
    )
    .await;
    create_item(
        client,
        "Web Development",
        Some("Frontend and backend development"),
        "Complete guide covering HTML, CSS, JavaScript, and server-side programming concepts.",
    )
    .await;
}
