//! Run configuration
//!
//! The binary takes at most two positional arguments, `pice [interval [count]]`.
//! An interval that cannot be used falls back to the default without a word;
//! a count that cannot be parsed is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::source::constants::{DEFAULT_FIRMWARE_COMMAND, DEFAULT_THERMAL_ZONE};

/// Seconds between two ticks when none is given
pub const DEFAULT_INTERVAL_SECS: f64 = 2.0;

/// Sample count meaning "until interrupted"
pub const UNBOUNDED_COUNT: i64 = -1;

/// Everything a monitoring run needs to know up front
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Pause between the end of one tick and the start of the next
    pub interval: Duration,
    /// Ticks to run before stopping; negative runs until interrupted
    pub count: i64,
    /// Thermal zone pseudo-file
    pub thermal_zone: PathBuf,
    /// Firmware query executable
    pub firmware_command: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs_f64(DEFAULT_INTERVAL_SECS),
            count: UNBOUNDED_COUNT,
            thermal_zone: PathBuf::from(DEFAULT_THERMAL_ZONE),
            firmware_command: DEFAULT_FIRMWARE_COMMAND.to_string(),
        }
    }
}

impl MonitorConfig {
    /// Build a configuration from positional arguments, program name excluded
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(interval) = args.next() {
            if let Some(interval) = parse_interval(interval.as_ref()) {
                config.interval = interval;
            }
        }
        if let Some(count) = args.next() {
            let count = count.as_ref();
            config.count = count
                .trim()
                .parse::<i64>()
                .map_err(|e| Error::invalid_argument(format!("count `{}`: {}", count, e)))?;
        }

        Ok(config)
    }

    /// Whether the run stops on its own
    pub fn is_bounded(&self) -> bool {
        self.count >= 0
    }
}

/// Seconds as a duration; `None` for anything negative, non-finite or garbled
fn parse_interval(text: &str) -> Option<Duration> {
    let secs = text.trim().parse::<f64>().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}
