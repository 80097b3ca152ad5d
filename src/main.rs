use clap::Parser;

use itemsearch_backend::cli::{Cli, execute_command};
use itemsearch_backend::config::{BootstrapSettings, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    execute_command(cli, &settings).await
}
