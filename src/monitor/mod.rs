//! Monitoring session state and the per-tick sampler
//!
//! [`Monitor`] is the aggregate owned by the control loop: counters, one
//! [`Extent`] per numeric metric, and the thermal zone handle. [`Sampler`]
//! fills it one [`Sample`] at a time.

use tracing::debug;

use crate::source::FileSource;
use crate::stats::{self, Extent};

mod sampler;
mod types;


pub use sampler::Sampler;
pub use types::{Counters, Sample};

/// Accumulated state of a monitoring session
pub struct Monitor {
    counters: Counters,
    cpu_temp: Option<Extent>,
    gpu_temp: Option<Extent>,
    pkg_voltage: Option<Extent>,
    thermal: Box<dyn FileSource>,
}

impl Monitor {
    /// Start an empty session reading CPU temperature from `thermal`
    pub fn new(thermal: Box<dyn FileSource>) -> Self {
        Self {
            counters: Counters::default(),
            cpu_temp: None,
            gpu_temp: None,
            pkg_voltage: None,
            thermal,
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn cpu_temp(&self) -> Option<Extent> {
        self.cpu_temp
    }

    pub fn gpu_temp(&self) -> Option<Extent> {
        self.gpu_temp
    }

    pub fn pkg_voltage(&self) -> Option<Extent> {
        self.pkg_voltage
    }

    /// Fold a completed sample into the session
    pub fn record(&mut self, sample: &Sample) {
        self.counters.reads += 1;
        if sample.throttled == Some(true) {
            self.counters.throttle_events += 1;
        }

        if let Some(v) = sample.cpu_temp {
            self.cpu_temp = Some(stats::update(self.cpu_temp, v));
        }
        if let Some(v) = sample.gpu_temp {
            self.gpu_temp = Some(stats::update(self.gpu_temp, v));
        }
        if let Some(v) = sample.pkg_voltage {
            self.pkg_voltage = Some(stats::update(self.pkg_voltage, v));
        }
    }

    /// Release the thermal zone handle
    pub fn close(&mut self) {
        debug!(reads = self.counters.reads, "closing monitor");
        self.thermal.close();
    }

    pub(crate) fn thermal(&mut self) -> &mut dyn FileSource {
        self.thermal.as_mut()
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("counters", &self.counters)
            .field("cpu_temp", &self.cpu_temp)
            .field("gpu_temp", &self.gpu_temp)
            .field("pkg_voltage", &self.pkg_voltage)
            .finish_non_exhaustive()
    }
}
