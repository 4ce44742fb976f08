//! Duration parsing for the `--duration` option.

use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Errors from [`parse_duration`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("Empty duration string")]
    Empty,

    #[error("Invalid duration value: {0}")]
    InvalidNumber(String),

    #[error("Unknown duration unit '{0}' (expected ms, s, m or h)")]
    UnknownUnit(String),

    #[error("Duration is out of range: {0}")]
    OutOfRange(String),
}

/// Parse a duration string like "1h", "30m", "300s", "500ms" or "300".
///
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Milliseconds suffix: "500ms"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
/// - Fractions and compound values: "1.5h", "1m30s"
pub fn parse_duration(s: &str) -> Result<Duration, DurationParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationParseError::Empty);
    }

    // No suffix - treat as seconds, bounded like the suffixed forms
    if let Ok(secs) = s.parse::<u64>() {
        return match secs.checked_mul(NANOS_PER_SEC) {
            Some(_) => Ok(Duration::from_secs(secs)),
            None => Err(DurationParseError::OutOfRange(s.to_string())),
        };
    }

    let is_number_char = |c: char| c.is_ascii_digit() || c == '.';

    let mut total_nanos = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let number_end = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail.find(is_number_char).unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);

        let value: f64 = number
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(s.to_string()))?;
        let unit_nanos = match unit {
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "" => return Err(DurationParseError::InvalidNumber(s.to_string())),
            other => return Err(DurationParseError::UnknownUnit(other.to_string())),
        };

        total_nanos += value * unit_nanos;
        rest = next;
    }

    if !total_nanos.is_finite() || total_nanos >= u64::MAX as f64 {
        return Err(DurationParseError::OutOfRange(s.to_string()));
    }

    Ok(Duration::from_nanos(total_nanos.round() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_seconds() {
        assert_eq!(parse_duration("300").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration(" 0 ").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_compound_and_fractional() {
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(
            parse_duration("2s250ms").unwrap(),
            Duration::from_millis(2250)
        );
    }

    #[test]
    fn test_out_of_range_plain_and_suffixed_agree() {
        assert!(matches!(
            parse_duration("18446744073709551615"),
            Err(DurationParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_duration("18446744073709551615s"),
            Err(DurationParseError::OutOfRange(_))
        ));
        assert_eq!(
            parse_duration("86400").unwrap(),
            Duration::from_secs(86_400)
        );
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert!(matches!(
            parse_duration("10d"),
            Err(DurationParseError::UnknownUnit(u)) if u == "d"
        ));
        assert!(matches!(
            parse_duration("s"),
            Err(DurationParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("-5s"),
            Err(DurationParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_duration("1.2.3s"),
            Err(DurationParseError::InvalidNumber(_))
        ));
    }
}
