//! Run lifecycle: pacing timer, deadline, shutdown signal and reporting.
//!
//! ```text
//!  Running ──(deadline | shutdown)──▶ Stopping ──(flush + stats)──▶ Stopped
//! ```
//!
//! The loop waits on whichever fires first, the pacing interval or the
//! shutdown channel. A batch runs to completion inside the tick branch, so
//! a shutdown is observed at the next scheduling point, never mid-batch.

use crate::config::EmitConfig;
use crate::emitter::PacedEmitter;
use crate::error::EmitterError;
use crate::pacing::BatchPlan;
use crate::sink::ByteSink;
use crate::stats::FinalStats;
use sensor_generator::{Registry, SensorGenerator};
use std::fmt;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Instant, MissedTickBehavior};
use std::future::Future;
use std::io;
use tracing::{debug, error, info, warn};

/// Why a run ended. Both are successful outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured duration elapsed.
    Deadline,
    /// An interrupt or termination signal was received.
    Signal,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Deadline => write!(f, "deadline"),
            StopReason::Signal => write!(f, "signal"),
        }
    }
}

/// Lifecycle state of an emission run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopping(StopReason),
    Stopped(StopReason),
}

/// Drives a [`PacedEmitter`] from start to a clean stop.
#[derive(Debug)]
pub struct LifecycleController {
    config: EmitConfig,
    plan: BatchPlan,
    state: RunState,
}

impl LifecycleController {
    pub fn new(config: EmitConfig) -> Self {
        let plan = BatchPlan::for_rate(config.rate);
        Self {
            config,
            plan,
            state: RunState::Running,
        }
    }

    pub fn plan(&self) -> BatchPlan {
        self.plan
    }

    fn transition(&mut self, next: RunState) {
        debug!("Lifecycle transition: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Run until the deadline passes or `shutdown` fires.
    ///
    /// The sink is flushed before returning, so the output holds only
    /// complete lines. A closed shutdown channel is ignored rather than
    /// treated as a stop request.
    pub async fn run<S: ByteSink>(
        mut self,
        registry: &Registry,
        sink: S,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<FinalStats, EmitterError> {
        let generator = match self.config.seed {
            Some(seed) => SensorGenerator::new(registry, seed),
            None => SensorGenerator::from_entropy(registry),
        };
        let mut emitter = PacedEmitter::new(generator, sink, self.plan);

        info!(
            "Emitting at {} records/sec: batch size {}, tick interval {:?}",
            self.config.rate, self.plan.batch_size, self.plan.tick_interval
        );

        let deadline = self.config.duration.and_then(|d| {
            let deadline = Instant::now().checked_add(d);
            if deadline.is_none() {
                warn!("Run duration {d:?} is too large; running until stopped");
            }
            deadline
        });
        let mut ticker = tokio::time::interval(self.plan.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
        let mut shutdown_open = true;

        let reason = loop {
            tokio::select! {
                biased;

                received = shutdown.recv(), if shutdown_open => match received {
                    Err(RecvError::Closed) => {
                        debug!("Shutdown channel closed; running until deadline");
                        shutdown_open = false;
                    }
                    _ => {
                        info!("Received shutdown signal");
                        break StopReason::Signal;
                    }
                },
                _ = ticker.tick() => {
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        info!("Run duration elapsed");
                        break StopReason::Deadline;
                    }

                    emitter.emit_batch()?;

                    if self.config.verbose {
                        let now = std::time::Instant::now();
                        let interval = self.config.report_interval;
                        let stats = emitter.stats_mut();
                        if stats.take_report_due(now, interval) {
                            // Requested by -v, so not subject to the log filter.
                            println!("{}", stats.progress_line(now));
                        }
                    }
                }
            }
        };

        self.transition(RunState::Stopping(reason));

        emitter.flush()?;
        let file_size = emitter.sink_size()?;
        let final_stats = emitter.stats().finish(file_size, reason);
        emitter.into_inner()?;

        self.transition(RunState::Stopped(reason));
        info!(
            "Emission complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            final_stats.total_records,
            final_stats.bytes_written,
            final_stats.elapsed,
            final_stats.average_rate
        );

        Ok(final_stats)
    }
}

const INTERRUPT_SIGNAL: &str = "interrupt signal (Ctrl+C)";
const TERMINATE_SIGNAL: &str = "termination signal (SIGTERM)";

/// Sets up a shutdown signal handler for Ctrl+C and SIGTERM.
///
/// Must be called from within a tokio runtime.
pub fn setup_shutdown_handler() -> Result<broadcast::Receiver<()>, EmitterError> {
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    #[cfg(unix)]
    let terminate = {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .map_err(EmitterError::Signal)?;
        async move {
            sigterm.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::spawn(async move {
        let signal = first_signal(tokio::signal::ctrl_c(), terminate).await;
        info!("Received {signal}");
        let _ = shutdown_tx.send(());
    });

    Ok(shutdown_rx)
}

/// Wait for whichever of the two signals arrives first.
///
/// If the Ctrl+C listener fails, termination is still awaited so the run
/// stays stoppable.
async fn first_signal<C, T>(ctrl_c: C, terminate: T) -> &'static str
where
    C: Future<Output = io::Result<()>>,
    T: Future<Output = ()>,
{
    tokio::pin!(terminate);

    let ctrl_c_result = tokio::select! {
        result = ctrl_c => Some(result),
        _ = &mut terminate => None,
    };

    match ctrl_c_result {
        Some(Ok(())) => INTERRUPT_SIGNAL,
        Some(Err(e)) => {
            error!("Failed to listen for Ctrl+C: {e}; waiting for SIGTERM only");
            terminate.await;
            TERMINATE_SIGNAL
        }
        None => TERMINATE_SIGNAL,
    }
}
