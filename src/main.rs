// Copyright 2026 Gridmap Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{Parser, Subcommand};
use gridmap_runtime::config::Settings;

mod cli;

#[derive(Parser)]
#[command(
    name = "gridmap",
    about = "Gridmap — view the geographic layers of a power network",
    version,
    after_help = "Run 'gridmap <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a network's map layers and render the outcome
    View {
        /// Network identifier to load
        #[arg(long)]
        id: Option<String>,

        /// Service base URL (default: $GRIDMAP_BASE_URL or http://localhost:8000)
        #[arg(long)]
        base_url: Option<String>,

        /// Login page to point at when the session is unauthorized
        #[arg(long)]
        login_url: Option<String>,
    },
    /// Show the resolved service configuration
    Config {
        /// Service base URL (default: $GRIDMAP_BASE_URL or http://localhost:8000)
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn init_tracing(verbose: bool) -> Result<()> {
    let directive = if verbose {
        "gridmap_runtime=debug"
    } else {
        "gridmap_runtime=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::View { id, base_url, login_url } => {
            let settings = Settings::resolve(base_url.as_deref(), login_url.as_deref())?;
            cli::view_cmd::run(settings, id, cli.json, cli.quiet).await
        }
        Commands::Config { base_url } => {
            let settings = Settings::resolve(base_url.as_deref(), None)?;
            cli::config_cmd::run(settings, cli.json).await
        }
    }
}
