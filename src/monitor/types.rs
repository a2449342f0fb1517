/// One reading of all four metrics
///
/// A field is `None` when its source could not be read or its output could
/// not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// CPU temperature in °C
    pub cpu_temp: Option<f64>,
    /// GPU temperature in °C
    pub gpu_temp: Option<f64>,
    /// Core voltage in volts
    pub pkg_voltage: Option<f64>,
    /// Whether the firmware reported any throttle flag
    pub throttled: Option<bool>,
}

impl Sample {
    /// True when every metric has a value
    pub fn is_complete(&self) -> bool {
        self.cpu_temp.is_some() && self.gpu_temp.is_some() && self.pkg_voltage.is_some() && self.throttled.is_some()
    }
}

/// Session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    /// Completed sampling cycles, successful or not
    pub reads: u64,
    /// Cycles in which throttling was reported
    pub throttle_events: u64,
}
