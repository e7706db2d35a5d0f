//! Echograph CLI - command-line interface for the typed random-walk
//! recommendation core.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "echograph")]
#[command(author, version, about = "Typed random-walk music recommendation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a recommendation query against a snapshot store.
    Recommend(commands::recommend::RecommendArgs),

    /// Load and validate a markov/random-walk configuration document.
    ValidateConfig(commands::validate_config::ValidateConfigArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    tracing::debug!(command = ?std::mem::discriminant(&cli.command), "dispatching command");

    match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::ValidateConfig(args) => commands::validate_config::run(args),
    }
}
