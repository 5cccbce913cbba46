//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod cities;
pub mod config;
pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Find the nearest on-duty pharmacies
#[derive(Parser)]
#[command(name = "duty-pharmacy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for on-duty pharmacies
    Search(search::SearchArgs),

    /// List cities and districts available for manual search
    Cities(cities::CitiesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Start the HTTP API (foreground)
    Serve(serve::ServeArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so formatted results on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Cities(args) => cities::run(args),
        Commands::Config(args) => config::run(args),
        Commands::Serve(args) => serve::run(args).await,
    }
}
