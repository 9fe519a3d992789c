use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockroute_cli::commands;
use stockroute_cli::commands::allocate::AllocateOptions;

#[derive(Parser)]
#[command(
    name = "stockroute",
    about = "Split orders across warehouses, cheapest first",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate an order and print the shipment plan as JSON.
    ///
    /// The request is `{"order": {...}, "warehouses": [{"name": ..., "inventory": {...}}]}`.
    /// Warehouses are listed cheapest first. An unfulfillable order prints `[]`.
    Allocate {
        /// Request file (default: stdin)
        #[arg(short, long, env = "STOCKROUTE_INPUT")]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Plan without drawing down warehouse stock
        #[arg(long)]
        preview: bool,
        /// Also print each warehouse's stock after the draw
        #[arg(long)]
        remaining: bool,
    },
    /// Check that a request is well formed without allocating.
    Validate {
        /// Request file (default: stdin)
        #[arg(short, long, env = "STOCKROUTE_INPUT")]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    stockroute_observability::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Allocate {
            input,
            output,
            pretty,
            preview,
            remaining,
        } => commands::allocate::allocate(
            input.as_deref(),
            output.as_deref(),
            AllocateOptions {
                pretty,
                preview,
                remaining,
            },
        ),
        Commands::Validate { input } => commands::validate::validate(input.as_deref()),
    }
}
