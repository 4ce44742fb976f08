//! Sensor identifier generator.

use rand::Rng;

/// Generate a sensor id of the form `SNS-<kind prefix>-<NNNN>`.
///
/// The prefix is the first three characters of the kind and the suffix a
/// zero-padded number in `0..10000`. Ids repeat across readings.
pub fn generate_sensor_id<R: Rng>(rng: &mut R, kind: &str) -> String {
    let prefix: String = kind.chars().take(3).collect();
    let suffix = rng.random_range(0..10_000u32);
    format!("SNS-{prefix}-{suffix:04}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_sensor_id_format() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let id = generate_sensor_id(&mut rng, "pressure");
            assert_eq!(id.len(), 12);
            assert!(id.starts_with("SNS-pre-"));
            assert!(id[8..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_sensor_id_short_kind() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = generate_sensor_id(&mut rng, "ph");
        assert!(id.starts_with("SNS-ph-"));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_sensor_id(&mut rng1, "flow_rate"),
            generate_sensor_id(&mut rng2, "flow_rate")
        );
    }
}
