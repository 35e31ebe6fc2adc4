//! Wallet currency registry CLI
//!
//! Loads a wallet currency configuration and answers support queries
//! against it.

mod commands;
mod config;

use clap::Parser;
use commands::{Command, run};
use config::ConfigLoader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect which wallet currencies are active and supported
#[derive(Parser, Debug)]
#[command(name = "walcur")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./walcur-config.toml")]
    config: PathBuf,

    /// Override the server's testnet flag
    #[arg(long, env = "WALCUR_TESTNET")]
    testnet: Option<bool>,

    /// Print JSON instead of plain text
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = Args::parse();

    let loaded_config = ConfigLoader::new(&args.config, args.testnet)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!("Configuration loaded from {:?}", args.config);

    let registry = loaded_config.into_registry().map_err(|e| {
        tracing::error!("Invalid wallet currency definition: {}", e);
        e
    })?;

    let outcome = run(&args.command, &registry, args.json)?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so command output stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
