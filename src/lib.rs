//! sensor-feed library
//!
//! Generates synthetic pipeline sensor telemetry at a controlled rate and
//! writes it as newline-delimited JSON, for load testing and demoing
//! ingestion pipelines.
//!
//! # CLI Usage
//!
//! ```bash
//! # 10,000 readings/sec into output.jsonl until Ctrl+C
//! sensor-feed
//!
//! # 500 readings/sec for five minutes, appending, with progress reports
//! sensor-feed -o readings.jsonl --rate 500 -d 5m --append -v
//!
//! # Reproducible run with a custom sensor catalog
//! sensor-feed --seed 42 --profiles profiles.yaml -d 30s
//! ```

use anyhow::Context;
use clap::Parser;
use sensor_emitter::{EmitArgs, FinalStats, LifecycleController, OutputSink};
use tokio::sync::broadcast;
use tracing::info;

// Re-export the workspace crates for convenience
pub use sensor_emitter as emitter;
pub use sensor_generator as generator;

#[derive(Parser, Clone, Debug)]
#[command(name = "sensor-feed")]
#[command(about = "Generate synthetic pipeline sensor telemetry as NDJSON at a target rate")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub emit: EmitArgs,
}

/// Open the sink, print the banner and run until the deadline or `shutdown`.
pub async fn run(cli: &Cli, shutdown: broadcast::Receiver<()>) -> anyhow::Result<FinalStats> {
    let args = &cli.emit;
    let config = args.to_config().context("Invalid configuration")?;
    let registry = args
        .load_registry()
        .context("Failed to load sensor profiles")?;

    let mode = args.output_mode();
    let sink = OutputSink::open(&args.output, mode)?;

    println!(
        "Generating sensor data to {} ({}) at ~{} entries/sec",
        args.output.display(),
        mode.as_str(),
        config.rate
    );
    if let Some(duration) = config.duration {
        println!("Duration: {duration:?}");
    }
    println!("Press Ctrl+C to stop...");

    info!(
        "Loaded {} sensor profiles across {} pipelines",
        registry.profiles().len(),
        registry.pipelines().len()
    );

    let stats = LifecycleController::new(config)
        .run(&registry, sink, shutdown)
        .await
        .context("Emission failed")?;

    Ok(stats)
}
