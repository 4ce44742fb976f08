//! CLI argument definitions for the sensor emitter.

use crate::config::EmitConfig;
use crate::duration::parse_duration;
use crate::error::EmitterError;
use crate::sink::OutputMode;
use clap::Args;
use sensor_generator::Registry;
use std::path::PathBuf;
use std::time::Duration;

/// Emission arguments.
#[derive(Args, Clone, Debug)]
pub struct EmitArgs {
    /// Output file path
    #[arg(long, short = 'o', default_value = "output.jsonl")]
    pub output: PathBuf,

    /// Target entries per second
    #[arg(long, default_value = "10000", value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,

    /// Duration to run, e.g. "30s", "5m", "1m30s" (0 or absent = until stopped)
    #[arg(long, short = 'd', value_parser = parse_duration)]
    pub duration: Option<Duration>,

    /// Verbose output with periodic stats
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Append to existing file instead of overwriting
    #[arg(long)]
    pub append: bool,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "SENSOR_FEED_SEED")]
    pub seed: Option<u64>,

    /// Path to a sensor profile YAML file replacing the built-in catalog
    #[arg(long, value_name = "PATH")]
    pub profiles: Option<PathBuf>,
}

impl EmitArgs {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_append_flag(self.append)
    }

    pub fn to_config(&self) -> Result<EmitConfig, EmitterError> {
        EmitConfig::try_from(self)
    }

    /// Load the profile catalog, falling back to the built-in one.
    pub fn load_registry(&self) -> Result<Registry, EmitterError> {
        match &self.profiles {
            Some(path) => Ok(Registry::from_file(path)?),
            None => Ok(Registry::builtin()),
        }
    }
}

impl TryFrom<&EmitArgs> for EmitConfig {
    type Error = EmitterError;

    fn try_from(args: &EmitArgs) -> Result<Self, Self::Error> {
        Ok(EmitConfig::new(args.rate)?
            .with_duration(args.duration)
            .with_verbose(args.verbose)
            .with_seed(args.seed))
    }
}
