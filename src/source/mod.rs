//! Raw metric sources
//!
//! Two kinds of source feed the sampler:
//!
//! - a pseudo-file (the kernel thermal zone) that is opened once and rewound
//!   before every read, see [`FileMetricSource`]
//! - an external firmware query tool invoked with a one-word subcommand, see
//!   [`CommandMetricSource`]
//!
//! Both hand back the raw text untouched; turning it into numbers is the job
//! of [`crate::parser`].
//!
//! # Examples
//!
//! ```no_run
//! use pice::source::{CommandMetricSource, CommandSource, Subcommand};
//!
//! # async fn example() -> pice::Result<()> {
//! let firmware = CommandMetricSource::default();
//! let raw = firmware.read_raw(Subcommand::MeasureTemp).await?;
//! println!("{raw}");
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub mod command;
pub mod constants;
pub mod file;


pub use command::CommandMetricSource;
pub use file::FileMetricSource;

/// Subcommands understood by the firmware query tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Throttle flag word, `throttled=0x50005`
    GetThrottled,
    /// GPU temperature, `temp=42.0'C`
    MeasureTemp,
    /// Core voltage, `volt=0.8500V`
    MeasureVolts,
}

impl Subcommand {
    /// The argument passed on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcommand::GetThrottled => constants::GET_THROTTLED,
            Subcommand::MeasureTemp => constants::MEASURE_TEMP,
            Subcommand::MeasureVolts => constants::MEASURE_VOLTS,
        }
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persistent, rewindable text source exposing a single value
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileSource: Send {
    /// Read the first line of the source, opening it on first use
    async fn read_raw(&mut self) -> Result<String>;

    /// Release the underlying handle. The next read reopens it.
    fn close(&mut self);
}

/// An external query producing free-form text per subcommand
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CommandSource: Send + Sync {
    /// Run the query and capture its standard output
    async fn read_raw(&self, subcommand: Subcommand) -> Result<String>;
}
