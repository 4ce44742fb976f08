//! Run configuration for the emission loop.

use crate::error::EmitterError;
use std::num::NonZeroU32;
use std::time::Duration;

/// Minimum spacing between verbose progress reports.
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Immutable settings for one emission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Target records per second.
    pub rate: NonZeroU32,
    /// Stop after this long; `None` runs until a shutdown signal.
    pub duration: Option<Duration>,
    /// Emit periodic progress reports.
    pub verbose: bool,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub report_interval: Duration,
}

impl EmitConfig {
    pub fn new(rate: u32) -> Result<Self, EmitterError> {
        let rate = NonZeroU32::new(rate).ok_or(EmitterError::InvalidRate(u64::from(rate)))?;
        Ok(Self {
            rate,
            duration: None,
            verbose: false,
            seed: None,
            report_interval: DEFAULT_REPORT_INTERVAL,
        })
    }

    /// A zero duration means no deadline.
    pub fn with_duration(mut self, duration: Option<Duration>) -> Self {
        self.duration = duration.filter(|d| !d.is_zero());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(EmitConfig::new(0), Err(EmitterError::InvalidRate(0))));
    }

    #[test]
    fn test_defaults() {
        let config = EmitConfig::new(100).unwrap();
        assert_eq!(config.rate.get(), 100);
        assert_eq!(config.duration, None);
        assert!(!config.verbose);
        assert_eq!(config.report_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_duration_means_indefinite() {
        let config = EmitConfig::new(100)
            .unwrap()
            .with_duration(Some(Duration::ZERO));
        assert_eq!(config.duration, None);

        let config = EmitConfig::new(100)
            .unwrap()
            .with_duration(Some(Duration::from_secs(2)));
        assert_eq!(config.duration, Some(Duration::from_secs(2)));
    }
}
