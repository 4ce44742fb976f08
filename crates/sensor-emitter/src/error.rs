//! Error types for the sensor emitter.

use sensor_generator::RegistryError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or running an emission.
#[derive(Error, Debug)]
pub enum EmitterError {
    /// The output file could not be opened for writing.
    #[error("Output sink unavailable: {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target rate below one record per second.
    #[error("Invalid target rate: {0} (must be at least 1 record/sec)")]
    InvalidRate(u64),

    /// Sensor registry could not be loaded.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Write or flush failure on the sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// OS signal handler could not be installed.
    #[error("Failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),
}
