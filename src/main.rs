//! appstack - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appstack::{
    cli::{Cli, Commands},
    commands,
    config::{Config, ENV_PRODUCTION},
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load and validate configuration; a missing environment is fatal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!(
                "Please set all required environment variables before running the application."
            );
            std::process::exit(1);
        }
    };
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::Check => commands::check::execute(config),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber.
///
/// Default level is INFO in production and DEBUG otherwise; `RUST_LOG`
/// overrides both, and `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| {
            let production = std::env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case(ENV_PRODUCTION))
                .unwrap_or(false);
            if production {
                "info".to_string()
            } else {
                "debug".to_string()
            }
        })
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
