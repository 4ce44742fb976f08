//! Main reading synthesizer.

use crate::generators::{numeric, pattern, pick, timestamp};
use crate::reading::{Location, SensorReading};
use crate::registry::Registry;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a reading carries an out-of-range anomaly.
pub const ANOMALY_PROBABILITY: f64 = 0.02;

/// Alert level forced onto anomalous readings that had none.
const ANOMALY_ALERT_LEVEL: &str = "medium";

/// Synthesizer that produces one plausible sensor reading per call.
///
/// The generator owns its RNG and borrows the registry, so readings can
/// borrow their string fields from the registry for as long as it lives.
/// Two generators created with the same registry and seed produce the same
/// sequence of readings (apart from the wall-clock timestamp).
pub struct SensorGenerator<'r> {
    /// Catalog of profiles, pipelines, statuses and alert levels
    registry: &'r Registry,
    /// Random source exclusively owned by this generator
    rng: StdRng,
    /// Number of readings synthesized so far
    generated: u64,
}

impl<'r> SensorGenerator<'r> {
    /// Create a new generator with a deterministic seed.
    pub fn new(registry: &'r Registry, seed: u64) -> Self {
        Self::with_rng(registry, StdRng::seed_from_u64(seed))
    }

    /// Create a new generator seeded from OS entropy.
    pub fn from_entropy(registry: &'r Registry) -> Self {
        Self::with_rng(registry, StdRng::from_os_rng())
    }

    fn with_rng(registry: &'r Registry, rng: StdRng) -> Self {
        Self {
            registry,
            rng,
            generated: 0,
        }
    }

    /// Number of readings synthesized so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Synthesize a reading stamped with the current time.
    pub fn synthesize(&mut self) -> SensorReading<'r> {
        self.synthesize_with_timestamp(timestamp::generate_timestamp_now())
    }

    /// Synthesize a reading stamped with the given time.
    ///
    /// Consumes exactly the same entropy as [`synthesize`](Self::synthesize),
    /// which makes it suitable for replaying a seeded run in tests.
    pub fn synthesize_at(&mut self, at: DateTime<Utc>) -> SensorReading<'r> {
        self.synthesize_with_timestamp(timestamp::format_timestamp(at))
    }

    fn synthesize_with_timestamp(&mut self, timestamp: String) -> SensorReading<'r> {
        let registry = self.registry;
        let rng = &mut self.rng;

        let profile = pick(rng, registry.profiles());
        let pipeline_id = pick(rng, registry.pipelines()).as_str();
        let status = pick(rng, registry.statuses()).as_str();
        let mut alert_level = pick(rng, registry.alert_levels()).as_str();

        let mut value = numeric::generate_float_range(rng, profile.min, profile.max);
        if rng.random_bool(ANOMALY_PROBABILITY) {
            value = numeric::generate_anomaly(rng, profile.max);
            if alert_level.is_empty() {
                alert_level = ANOMALY_ALERT_LEVEL;
            }
        }

        let sensor_id = pattern::generate_sensor_id(rng, &profile.kind);
        let quality_score = numeric::generate_quality_score(rng);

        // Roughly the US oil and gas regions.
        let location = Location {
            latitude: 25.0 + rng.random::<f64>() * 20.0,
            longitude: -105.0 + rng.random::<f64>() * 15.0,
            mile_post: rng.random::<f64>() * 500.0,
        };

        self.generated += 1;

        SensorReading {
            sensor_id,
            timestamp,
            kind: &profile.kind,
            value,
            unit: &profile.unit,
            location,
            pipeline_id,
            status,
            quality_score,
            alert_level,
        }
    }
}

impl std::fmt::Debug for SensorGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorGenerator")
            .field("profiles", &self.registry.profiles().len())
            .field("generated", &self.generated)
            .finish()
    }
}
