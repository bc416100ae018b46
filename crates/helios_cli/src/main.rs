mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "helios")]
#[command(version, about = "Helios nomenclature dataset validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the integrity checks against a dataset snapshot
    Validate {
        /// Snapshot document (JSON, YAML or TOML) or export directory
        dataset: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Validator config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Production planet that marks a unit as imported
        #[arg(long)]
        import_planet: Option<String>,

        /// Allowed deviation of BOM sums from 100%, in percentage points
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Load a dataset snapshot and print its table sizes
    Check {
        /// Snapshot document (JSON, YAML or TOML) or export directory
        dataset: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    match cli.command {
        Commands::Validate {
            dataset,
            format,
            config,
            import_planet,
            tolerance,
        } => commands::validate::execute(
            &dataset,
            &format,
            config.as_deref(),
            import_planet,
            tolerance,
            cli.verbose,
        ),

        Commands::Check { dataset } => commands::check::execute(&dataset),
    }
}
