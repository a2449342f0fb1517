//! pice - Raspberry Pi temperature, voltage and throttling monitor
//!
//! Polls four health metrics of a Raspberry Pi at a fixed interval, prints
//! one line per complete sample, keeps running min/max statistics and prints a
//! summary when the run ends.
//!
//! # Sources
//!
//! - **CPU temperature**: the kernel thermal zone pseudo-file, in millidegrees
//! - **GPU temperature**, **core voltage**, **throttle flags**: the `vcgencmd`
//!   firmware query tool
//!
//! # Examples
//!
//! ```no_run
//! use pice::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = MonitorConfig::from_args(["1", "5"])?;
//!     let mut monitor = Monitor::new(Box::new(FileMetricSource::new(&config.thermal_zone)));
//!     let sampler = Sampler::new(Box::new(CommandMetricSource::new(&config.firmware_command)));
//!
//!     let mut controller = Controller::new(&config, std::io::stdout());
//!     controller.run(&mut monitor, &sampler, shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Unreadable sources and unparseable output never surface as errors from a
//! tick; the affected metric is simply missing from that sample. Errors are
//! reserved for bad arguments and failing writes to the output.
#![doc(html_root_url = "https://docs.rs/pice/0.1.0")]

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod parser;
pub mod report;
pub mod source;
pub mod stats;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::MonitorConfig;
    pub use crate::controller::{shutdown_signal, Controller, RunState, StopReason};
    pub use crate::monitor::{Counters, Monitor, Sample, Sampler};
    pub use crate::source::{CommandMetricSource, CommandSource, FileMetricSource, FileSource, Subcommand};
    pub use crate::stats::Extent;
    pub use crate::Error;
    pub use crate::Result;
}
