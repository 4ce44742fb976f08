//! Running and final statistics for an emission run.

use crate::lifecycle::StopReason;
use std::fmt;
use std::time::{Duration, Instant};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Counters updated by the emission loop.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// Records written to the sink.
    pub records: u64,
    /// Records skipped because they could not be serialized.
    pub dropped: u64,
    /// Bytes written to the sink during this run.
    pub bytes_written: u64,
    started: Instant,
    last_report: Instant,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(started: Instant) -> Self {
        Self {
            records: 0,
            dropped: 0,
            bytes_written: 0,
            started,
            last_report: started,
        }
    }

    pub fn record_written(&mut self, bytes: usize) {
        self.records += 1;
        self.bytes_written += bytes as u64;
    }

    pub fn record_dropped(&mut self) {
        self.dropped += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Average records per second between `started` and `now`.
    pub fn average_rate_at(&self, now: Instant) -> f64 {
        rate(self.records, now.saturating_duration_since(self.started))
    }

    /// One-line progress report for verbose runs.
    pub fn progress_line(&self, now: Instant) -> String {
        format!(
            "  {} entries written ({:.0}/sec avg)",
            self.records,
            self.average_rate_at(now)
        )
    }

    /// Whether at least `interval` has passed since the previous report.
    ///
    /// Marks the report as done when it returns true.
    pub fn take_report_due(&mut self, now: Instant, interval: Duration) -> bool {
        if now.saturating_duration_since(self.last_report) >= interval {
            self.last_report = now;
            true
        } else {
            false
        }
    }

    /// Freeze the counters into a final report.
    pub fn finish(&self, file_size_bytes: u64, stop_reason: StopReason) -> FinalStats {
        let elapsed = self.elapsed();
        FinalStats {
            total_records: self.records,
            dropped_records: self.dropped,
            elapsed,
            average_rate: rate(self.records, elapsed),
            bytes_written: self.bytes_written,
            file_size_bytes,
            stop_reason,
        }
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

fn rate(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}

/// Statistics reported once the run has stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStats {
    pub total_records: u64,
    pub dropped_records: u64,
    pub elapsed: Duration,
    pub average_rate: f64,
    /// Bytes written during this run.
    pub bytes_written: u64,
    /// Size of the output after the run, including appended-to content.
    pub file_size_bytes: u64,
    pub stop_reason: StopReason,
}

impl FinalStats {
    /// Average serialized size of a record written during this run.
    pub fn avg_record_bytes(&self) -> f64 {
        if self.total_records > 0 {
            self.bytes_written as f64 / self.total_records as f64
        } else {
            0.0
        }
    }

    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB
    }
}

impl fmt::Display for FinalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Final Stats ---")?;
        writeln!(f, "Stopped by: {}", self.stop_reason)?;
        writeln!(f, "Total entries: {}", self.total_records)?;
        writeln!(f, "Duration: {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Average rate: {:.0} entries/sec", self.average_rate)?;
        writeln!(f, "File size: {:.2} MB", self.file_size_mb())?;
        write!(f, "Avg entry size: {:.0} bytes", self.avg_record_bytes())?;
        if self.dropped_records > 0 {
            write!(f, "\nDropped entries: {}", self.dropped_records)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_stats(total_records: u64, elapsed: Duration) -> FinalStats {
        FinalStats {
            total_records,
            dropped_records: 0,
            elapsed,
            average_rate: rate(total_records, elapsed),
            bytes_written: total_records * 200,
            file_size_bytes: 2 * 1024 * 1024,
            stop_reason: StopReason::Deadline,
        }
    }

    #[test]
    fn test_counters() {
        let mut stats = RunStatistics::new();
        stats.record_written(100);
        stats.record_written(120);
        stats.record_dropped();

        assert_eq!(stats.records, 2);
        assert_eq!(stats.bytes_written, 220);
        assert_eq!(stats.dropped, 1);
    }

    #[test]
    fn test_average_rate() {
        let start = Instant::now();
        let mut stats = RunStatistics::starting_at(start);
        for _ in 0..1000 {
            stats.record_written(10);
        }

        assert_eq!(stats.average_rate_at(start + Duration::from_secs(10)), 100.0);
        assert_eq!(stats.average_rate_at(start), 0.0);
    }

    #[test]
    fn test_progress_line() {
        let start = Instant::now();
        let mut stats = RunStatistics::starting_at(start);
        for _ in 0..500 {
            stats.record_written(10);
        }

        assert_eq!(
            stats.progress_line(start + Duration::from_secs(5)),
            "  500 entries written (100/sec avg)"
        );
        assert_eq!(
            stats.progress_line(start),
            "  500 entries written (0/sec avg)"
        );
    }

    #[test]
    fn test_report_interval() {
        let start = Instant::now();
        let mut stats = RunStatistics::starting_at(start);
        let interval = Duration::from_secs(5);

        assert!(!stats.take_report_due(start + Duration::from_secs(4), interval));
        assert!(stats.take_report_due(start + Duration::from_secs(5), interval));
        assert!(!stats.take_report_due(start + Duration::from_secs(9), interval));
        assert!(stats.take_report_due(start + Duration::from_secs(10), interval));
    }

    #[test]
    fn test_final_stats_zero_guards() {
        let stats = final_stats(0, Duration::ZERO);

        assert_eq!(stats.average_rate, 0.0);
        assert_eq!(stats.avg_record_bytes(), 0.0);
        assert!(stats.to_string().contains("Total entries: 0"));
    }

    #[test]
    fn test_final_stats_display() {
        let stats = final_stats(1000, Duration::from_secs(2));

        assert_eq!(stats.avg_record_bytes(), 200.0);
        assert_eq!(stats.file_size_mb(), 2.0);

        let text = stats.to_string();
        assert!(text.contains("Total entries: 1000"));
        assert!(text.contains("Average rate: 500 entries/sec"));
        assert!(text.contains("File size: 2.00 MB"));
        assert!(text.contains("Avg entry size: 200 bytes"));
        assert!(!text.contains("Dropped"));
    }

    #[test]
    fn test_finish_snapshot() {
        let mut stats = RunStatistics::new();
        stats.record_written(50);

        let done = stats.finish(50, StopReason::Signal);
        assert_eq!(done.total_records, 1);
        assert_eq!(done.file_size_bytes, 50);
        assert_eq!(done.stop_reason, StopReason::Signal);
    }
}
