//! Synthetic sensor reading generator for sensor-feed.
//!
//! This crate provides the [`Registry`] catalog of sensor profiles and the
//! [`SensorGenerator`] which turns it into a stream of plausible pipeline
//! telemetry readings. The generator owns a seeded RNG so a run can be
//! replayed exactly when the same seed is supplied.
//!
//! # Architecture
//!
//! ```text
//! Registry (built-in or YAML)
//!        │  (borrowed)
//!        ▼
//! ┌──────────────────┐
//! │ SensorGenerator  │
//! │                  │
//! │  - registry      │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    SensorReading { sensor_id, timestamp, type, value, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use sensor_generator::{Registry, SensorGenerator};
//!
//! let registry = Registry::builtin();
//! let mut generator = SensorGenerator::new(&registry, 42);
//! let reading = generator.synthesize();
//! println!("{}", serde_json::to_string(&reading).unwrap());
//! ```

pub mod generator;
pub mod generators;
pub mod reading;
pub mod registry;

// Re-exports for convenience
pub use generator::{SensorGenerator, ANOMALY_PROBABILITY};
pub use reading::{Location, SensorReading};
pub use registry::{Registry, RegistryError, SensorTypeProfile};
