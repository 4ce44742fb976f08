//! Individual value generators used to assemble a reading.
//!
//! Each generator takes the RNG explicitly so that every value drawn for a
//! reading comes from the single random source owned by the
//! [`SensorGenerator`](crate::SensorGenerator).

pub mod numeric;
pub mod pattern;
pub mod timestamp;

use rand::Rng;

/// Pick one entry uniformly from a non-empty slice.
///
/// Skew is expressed by repeating entries in the slice, not by weights.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
