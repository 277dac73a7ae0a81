//! Favorites CLI - render and inspect favorites feeds.
//!
//! Commands:
//! - `favorites render` - Fetch a feed and render the full page HTML
//! - `favorites validate` - Shape-check a feed and report its contents

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ValidateArgs};

/// Favorites CLI - render and inspect favorites feeds
#[derive(Parser)]
#[command(name = "favorites")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a feed into the full favorites page HTML
    Render(RenderArgs),

    /// Shape-check a feed and report its contents
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &output).await,
        Commands::Validate(args) => commands::validate::run(args, &output).await,
    };

    if let Err(e) = &result {
        output.error(&e.to_string());
        std::process::exit(1);
    }
    result
}
