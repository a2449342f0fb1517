//! The sampling loop
//!
//! A [`Controller`] drives ticks at a fixed interval until its tick budget
//! runs out or the shutdown future resolves, then writes the summary. The
//! shutdown future is raced against both the sample and the pause, so an
//! interrupt is acted on right away.
//!
//! ```text
//! Running --(budget exhausted | shutdown)--> Stopping --(summary written)--> Stopped
//! ```

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::monitor::{Monitor, Sampler};
use crate::report;

mod signal;

pub use signal::shutdown_signal;

/// Lifecycle of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopping,
    Stopped,
}

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of ticks was taken
    Completed,
    /// The shutdown future resolved first
    Interrupted,
}

/// Ticks left before the loop stops on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickBudget {
    Unbounded,
    Remaining(u64),
}

impl TickBudget {
    /// Negative counts are unbounded. A count of zero still allows one tick.
    pub fn from_count(count: i64) -> Self {
        u64::try_from(count).map_or(TickBudget::Unbounded, TickBudget::Remaining)
    }

    fn consume(&mut self) {
        if let TickBudget::Remaining(n) = self {
            *n = n.saturating_sub(1);
        }
    }

    fn is_exhausted(&self) -> bool {
        matches!(self, TickBudget::Remaining(0))
    }
}

/// Drives the sampler and writes to `out`
pub struct Controller<W: Write> {
    interval: Duration,
    budget: TickBudget,
    state: RunState,
    stop_reason: Option<StopReason>,
    out: W,
}

impl<W: Write> Controller<W> {
    pub fn new(config: &MonitorConfig, out: W) -> Self {
        Self {
            interval: config.interval,
            budget: TickBudget::from_count(config.count),
            state: RunState::Running,
            stop_reason: None,
            out,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn budget(&self) -> TickBudget {
        self.budget
    }

    /// Hand back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run ticks until the budget is spent or `shutdown` resolves
    ///
    /// Either way the summary is written before returning. A controller that
    /// already stopped returns its earlier reason without sampling again.
    pub async fn run<F>(&mut self, monitor: &mut Monitor, sampler: &Sampler, shutdown: F) -> Result<StopReason>
    where
        F: Future<Output = ()>,
    {
        if let Some(reason) = self.stop_reason {
            return Ok(reason);
        }
        tokio::pin!(shutdown);
        debug!(interval = ?self.interval, budget = ?self.budget, "sampling started");

        loop {
            self.budget.consume();

            let sample = tokio::select! {
                biased;
                _ = &mut shutdown => None,
                sample = sampler.sample(monitor) => Some(sample),
            };
            let Some(sample) = sample else {
                return self.stop(monitor, StopReason::Interrupted);
            };

            if let Some(line) = report::format_sample(&sample) {
                writeln!(self.out, "{}", line)?;
                self.out.flush()?;
            }

            if self.budget.is_exhausted() {
                return self.stop(monitor, StopReason::Completed);
            }

            let interrupted = tokio::select! {
                biased;
                _ = &mut shutdown => true,
                _ = tokio::time::sleep(self.interval) => false,
            };
            if interrupted {
                return self.stop(monitor, StopReason::Interrupted);
            }
        }
    }

    fn stop(&mut self, monitor: &Monitor, reason: StopReason) -> Result<StopReason> {
        self.state = RunState::Stopping;
        info!(?reason, reads = monitor.counters().reads, "sampling stopped");

        write!(self.out, "\n\n{}\n", report::format_summary(monitor))?;
        self.out.flush()?;

        self.state = RunState::Stopped;
        self.stop_reason = Some(reason);
        Ok(reason)
    }
}
