//! Rate-paced NDJSON emission of synthetic sensor readings.
//!
//! This crate drives a [`sensor_generator::SensorGenerator`] on a timer,
//! writing batches of readings as newline-delimited JSON into a buffered
//! sink until a deadline passes or a shutdown signal arrives.
//!
//! # Example
//!
//! ```ignore
//! use sensor_emitter::{EmitConfig, LifecycleController, OutputMode, OutputSink};
//! use sensor_generator::Registry;
//!
//! let registry = Registry::builtin();
//! let config = EmitConfig::new(1000)?.with_duration(Some(Duration::from_secs(5)));
//! let sink = OutputSink::open("readings.jsonl", OutputMode::Overwrite)?;
//! let shutdown = sensor_emitter::setup_shutdown_handler()?;
//!
//! let stats = LifecycleController::new(config).run(&registry, sink, shutdown).await?;
//! println!("{stats}");
//! ```

pub mod args;
pub mod config;
pub mod duration;
pub mod emitter;
pub mod error;
pub mod lifecycle;
pub mod pacing;
pub mod sink;
pub mod stats;

pub use args::EmitArgs;
pub use config::EmitConfig;
pub use duration::{parse_duration, DurationParseError};
pub use emitter::PacedEmitter;
pub use error::EmitterError;
pub use lifecycle::{setup_shutdown_handler, LifecycleController, RunState, StopReason};
pub use pacing::BatchPlan;
pub use sink::{ByteSink, OutputMode, OutputSink};
pub use stats::{FinalStats, RunStatistics};
