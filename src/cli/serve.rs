use std::sync::Arc;

use poem::Server;
use poem::listener::TcpListener;

use crate::api::create_app;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, init_database, migrate_database};

/// Connect, migrate and serve HTTP until the process is stopped
pub async fn run_server(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db));

    let address = settings.server_address();
    let public_url = format!("http://localhost:{}", settings.server_port());
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);

    let app = create_app(app_data, public_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
