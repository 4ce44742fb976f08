//! Conversion of a target rate into a batch size and tick interval.

use std::num::NonZeroU32;
use std::time::Duration;

/// Largest number of records written on a single tick.
pub const MAX_BATCH_SIZE: u32 = 1000;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// How a target rate is split into timer ticks.
///
/// Writing `batch_size` records every `tick_interval` averages out to the
/// target rate without scheduling each record individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    pub batch_size: u32,
    pub tick_interval: Duration,
}

impl BatchPlan {
    /// Plan batches for `rate` records per second.
    pub fn for_rate(rate: NonZeroU32) -> Self {
        let rate = rate.get();
        let batch_size = rate.min(MAX_BATCH_SIZE).max(1);

        // Computed in nanoseconds and rounded, so low rates do not lose the
        // fractional part of a second.
        let rate = u128::from(rate);
        let nanos = (NANOS_PER_SEC * u128::from(batch_size) + rate / 2) / rate;
        let tick_interval = Duration::from_nanos(nanos as u64);

        Self {
            batch_size,
            tick_interval,
        }
    }

    /// Records per second this plan produces when every tick fires on time.
    pub fn effective_rate(&self) -> f64 {
        let secs = self.tick_interval.as_secs_f64();
        if secs > 0.0 {
            f64::from(self.batch_size) / secs
        } else {
            0.0
        }
    }
}
