//! Numeric value generators.

use rand::Rng;

/// Generate a random float in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Generate a value above the nominal maximum by up to 20%.
///
/// The overshoot is scaled by `|max|` so the result never falls below
/// `max`, even for profiles whose maximum is negative.
pub fn generate_anomaly<R: Rng>(rng: &mut R, max: f64) -> f64 {
    let u: f64 = rng.random();
    max + u * max.abs() * 0.2
}

/// Generate a quality score in `[0.85, 1.0)`.
pub fn generate_quality_score<R: Rng>(rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    // 0.85 + u * 0.15 can round up to exactly 1.0 for u close to 1.
    (0.85 + u * 0.15).min(1.0 - f64::EPSILON)
}
