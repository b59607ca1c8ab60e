//! StudyHub - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::Settings;
use studyhub_cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration once; nothing runs on incomplete settings
    let settings = match Settings::load(cli.env_file.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(code = e.code(), "Configuration failed: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, &settings).await,
        Commands::Show(args) => commands::show::execute(args, &settings),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
