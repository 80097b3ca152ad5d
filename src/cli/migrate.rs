use crate::config::{BootstrapSettings, init_database, migrate_database};
use crate::errors::InternalError;

/// Connect to the configured database and apply pending migrations
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), InternalError> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    tracing::info!("Migrations applied to {}", settings.database_url());

    Ok(())
}
