use tracing::{debug, instrument};

use super::{Monitor, Sample};
use crate::parser;
use crate::source::{CommandSource, Subcommand};

/// Reads all four metrics once per tick
///
/// Reads happen in a fixed order: throttle flags, CPU temperature, GPU
/// temperature, core voltage. The monitor is only touched after the last
/// read, so a tick dropped halfway leaves it unchanged.
pub struct Sampler {
    firmware: Box<dyn CommandSource>,
}

impl Sampler {
    pub fn new(firmware: Box<dyn CommandSource>) -> Self {
        Self { firmware }
    }

    /// Take one sample and fold it into `monitor`
    #[instrument(level = "trace", skip_all)]
    pub async fn sample(&self, monitor: &mut Monitor) -> Sample {
        let throttled = self.throttled().await;
        let cpu_temp = Self::cpu_temp(monitor).await;
        let gpu_temp = self.query(Subcommand::MeasureTemp, parser::parse_gpu_temp).await;
        let pkg_voltage = self.query(Subcommand::MeasureVolts, parser::parse_voltage).await;

        let sample = Sample { cpu_temp, gpu_temp, pkg_voltage, throttled };
        monitor.record(&sample);
        sample
    }

    async fn throttled(&self) -> Option<bool> {
        let flags = self.query(Subcommand::GetThrottled, parser::parse_throttle_flags).await?;
        if flags.any() {
            debug!(%flags, conditions = ?flags.active_conditions(), "throttle flags set");
        }
        Some(flags.any())
    }

    async fn cpu_temp(monitor: &mut Monitor) -> Option<f64> {
        match monitor.thermal().read_raw().await {
            Ok(raw) => {
                let value = parser::parse_cpu_temp(&raw);
                if value.is_none() {
                    debug!(raw = %raw, "unparseable thermal zone reading");
                }
                value
            }
            Err(e) => {
                debug!(error = %e, "thermal zone unavailable");
                None
            }
        }
    }

    async fn query<T>(&self, subcommand: Subcommand, parse: fn(&str) -> Option<T>) -> Option<T> {
        match self.firmware.read_raw(subcommand).await {
            Ok(raw) => {
                let value = parse(&raw);
                if value.is_none() {
                    debug!(%subcommand, raw = %raw.trim_end(), "unparseable firmware reading");
                }
                value
            }
            Err(e) => {
                debug!(%subcommand, error = %e, "firmware query unavailable");
                None
            }
        }
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler").finish_non_exhaustive()
    }
}
