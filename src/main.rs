//! Command-line interface for sensor-feed
//!
//! # Usage Examples
//!
//! ```bash
//! # Overwrite output.jsonl at 10k entries/sec until interrupted
//! sensor-feed
//!
//! # Run for 2 seconds at 50k entries/sec
//! sensor-feed --rate 50000 -d 2s
//!
//! # Append to an existing file with periodic progress
//! sensor-feed -o /var/data/sensors.jsonl --append -v
//! ```

use clap::Parser;
use sensor_feed::{run, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.emit.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run_cli(&cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run_cli(cli: &Cli) -> anyhow::Result<()> {
    let shutdown = sensor_feed::emitter::setup_shutdown_handler()?;
    let stats = run(cli, shutdown).await?;

    println!();
    println!("{stats}");
    Ok(())
}
