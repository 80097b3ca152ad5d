use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::config::BootstrapSettings;
use crate::errors::{DatabaseError, InternalError};

/// Initialize the database connection
///
/// Connects to the database and returns the connection.
/// Does NOT run migrations - call migrate_database() separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn init_database(
    bootstrap_settings: &BootstrapSettings,
) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Run pending migrations on the items database
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}

pub async fn begin_transaction(db: &DatabaseConnection) -> Result<DatabaseTransaction, InternalError> {
    let txn = db
        .begin()
        .await
        .map_err(|source| DatabaseError::TransactionBegin { source })?;
    Ok(txn)
}

pub async fn commit_transaction(txn: DatabaseTransaction) -> Result<(), InternalError> {
    txn.commit()
        .await
        .map_err(|source| DatabaseError::TransactionCommit { source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    #[tokio::test]
    async fn test_migrate_database_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        migrate_database(&db).await.unwrap();
        migrate_database(&db).await.unwrap();

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "SELECT COUNT(*) AS count FROM items",
            ))
            .await
            .unwrap()
            .unwrap();
        let count: i64 = row.try_get("", "count").unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_transaction_round_trip() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migrate_database(&db).await.unwrap();

        let txn = begin_transaction(&db).await.unwrap();
        txn.execute(Statement::from_string(
            txn.get_database_backend(),
            "INSERT INTO items (title, description, content, title_search, description_search, content_search, created_at) \
             VALUES ('T', NULL, 'C', 't', NULL, 'c', 1)",
        ))
        .await
        .unwrap();
        commit_transaction(txn).await.unwrap();

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "SELECT COUNT(*) AS count FROM items",
            ))
            .await
            .unwrap()
            .unwrap();
        let count: i64 = row.try_get("", "count").unwrap();
        assert_eq!(count, 1);
    }
}
