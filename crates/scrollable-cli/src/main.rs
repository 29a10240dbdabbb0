use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollable_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollable")]
#[command(author, version, about = "Queued, speed-aware scroll animations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/scrollable/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scroll script against a virtual viewport
    Play {
        /// Path to the TOML script
        script: PathBuf,
    },
    /// Show the effective duration of a scroll movement
    Duration {
        /// Distance in px
        #[arg(short = 'd', long)]
        distance: f64,
        /// Requested duration in ms (configured default if omitted)
        #[arg(short = 't', long = "duration")]
        duration_ms: Option<u64>,
        /// Speed lock distance in px, 0 disables it
        #[arg(short = 'l', long)]
        lock_speed_below: Option<f64>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Play { script } => commands::play::run(&script, &config).await,
        Commands::Duration {
            distance,
            duration_ms,
            lock_speed_below,
        } => commands::duration::run(&config, distance, duration_ms, lock_speed_below),
        Commands::Config => commands::config::run(&config, &config_path),
    }
}
