// CLI module for operating the item search server

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Item search backend CLI
#[derive(Parser, Debug)]
#[command(name = "itemsearch")]
#[command(about = "Searchable item catalog backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Bootstrap settings loaded from the environment
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(settings).await?,
        Commands::Migrate => migrate::run_migrations(settings).await?,
    }

    Ok(())
}
