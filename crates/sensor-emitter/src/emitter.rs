//! Batched NDJSON writer driven by the lifecycle timer.

use crate::error::EmitterError;
use crate::pacing::BatchPlan;
use crate::sink::ByteSink;
use crate::stats::RunStatistics;
use sensor_generator::SensorGenerator;
use std::io::{BufWriter, Write};
use tracing::{debug, warn};

/// Buffer size for the output writer.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Writes batches of synthesized readings into a buffered sink.
///
/// Each call to [`emit_batch`](Self::emit_batch) writes a whole batch and
/// flushes it, so an external reader tailing the file sees complete lines
/// within one tick and never a partial batch.
pub struct PacedEmitter<'r, S: ByteSink> {
    generator: SensorGenerator<'r>,
    writer: BufWriter<S>,
    plan: BatchPlan,
    stats: RunStatistics,
    /// Reused serialization buffer for one line
    line: Vec<u8>,
}

impl<'r, S: ByteSink> PacedEmitter<'r, S> {
    pub fn new(generator: SensorGenerator<'r>, sink: S, plan: BatchPlan) -> Self {
        Self::with_buffer_size(generator, sink, plan, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_buffer_size(
        generator: SensorGenerator<'r>,
        sink: S,
        plan: BatchPlan,
        buffer_size: usize,
    ) -> Self {
        Self {
            generator,
            writer: BufWriter::with_capacity(buffer_size, sink),
            plan,
            stats: RunStatistics::new(),
            line: Vec::with_capacity(512),
        }
    }

    pub fn plan(&self) -> BatchPlan {
        self.plan
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut RunStatistics {
        &mut self.stats
    }

    /// Synthesize, write and flush one batch.
    ///
    /// Returns the number of records written. A record that fails to
    /// serialize is dropped and counted; write and flush failures are fatal.
    pub fn emit_batch(&mut self) -> Result<u32, EmitterError> {
        let mut written = 0;

        for _ in 0..self.plan.batch_size {
            let reading = self.generator.synthesize();

            // Serialize into a scratch buffer first so a failed record never
            // leaves partial bytes in the sink.
            self.line.clear();
            if let Err(e) = serde_json::to_writer(&mut self.line, &reading) {
                self.stats.record_dropped();
                warn!("Dropping reading {}: {}", reading.sensor_id, e);
                continue;
            }
            self.line.push(b'\n');

            self.writer.write_all(&self.line)?;
            self.stats.record_written(self.line.len());
            written += 1;
        }

        self.writer.flush()?;
        debug!(
            "Batch of {} records flushed ({} total)",
            written, self.stats.records
        );

        Ok(written)
    }

    /// Flush any buffered bytes to the sink.
    pub fn flush(&mut self) -> Result<(), EmitterError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Current size of the sink, including content from before this run.
    pub fn sink_size(&self) -> Result<u64, EmitterError> {
        Ok(self.writer.get_ref().size_bytes()?)
    }

    /// Flush and hand back the sink.
    pub fn into_inner(self) -> Result<S, EmitterError> {
        self.writer
            .into_inner()
            .map_err(|e| EmitterError::Io(e.into_error()))
    }
}
