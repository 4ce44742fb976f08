//! Timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format the current UTC time as RFC 3339 with nanosecond precision.
///
/// This is NOT deterministic - each call reads the clock.
pub fn generate_timestamp_now() -> String {
    format_timestamp(Utc::now())
}

/// Format a UTC time as RFC 3339 with nanosecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T12:30:45.123456789Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_timestamp(at), "2024-03-01T12:30:45.123456789Z");
    }

    #[test]
    fn test_generate_timestamp_now_parses() {
        let ts = generate_timestamp_now();
        assert!(ts.ends_with('Z'));

        let parsed = DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
