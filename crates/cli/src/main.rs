//! Paradise Nursery CLI - cart script replay and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Replay a YAML (or JSON) list of cart actions and show the resulting cart
//! pn-cli replay crates/cli/scripts/aloe.yaml
//!
//! # Print the final cart as JSON instead of a table
//! pn-cli replay crates/cli/scripts/aloe.yaml --json
//!
//! # Validate a catalog file
//! pn-cli catalog check crates/storefront/catalog/plants.json
//! ```
//!
//! # Commands
//!
//! - `replay` - Apply cart actions in order, logging each step
//! - `catalog check` - Report catalog problems (duplicate names, missing prices)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(author, version, about = "Paradise Nursery CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a script of cart actions
    Replay {
        /// Path to a YAML or JSON list of actions
        script: String,

        /// Print the final cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Catalog tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate a catalog file
    Check {
        /// Path to the catalog JSON file
        path: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Replay { script, json } => commands::replay::run(&script, json).await?,
        Commands::Catalog { action } => match action {
            CatalogAction::Check { path } => commands::catalog::check(&path).await?,
        },
    }
    Ok(())
}
