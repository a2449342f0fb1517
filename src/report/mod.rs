//! Text rendering of samples and the session summary
//!
//! ```text
//! CPU: +55.0°C 	GPU: +42.0°C 	Vcore: 0.8500V
//!  Summary     min     max
//! CPU (°C)   +48.3   +58.4
//! GPU (°C)   +47.2   +57.3
//! PKG ( V)  0.8500  0.8625
//!
//! Throttles: 0
//!   Samples: 12
//! ```

use crate::monitor::{Monitor, Sample};
use crate::stats::Extent;

/// Placeholder for a metric that never produced a value
pub const NOT_AVAILABLE: &str = "n/a";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// `+42.0°C`, always signed with one decimal
pub fn format_celsius(temp: f64) -> String {
    format!("{:>+4.1}°C", temp)
}

/// `0.8500V`, four decimals
pub fn format_volts(volts: f64) -> String {
    format!("{:>4.4}V", volts)
}

/// Per-tick line, or `None` when any metric is missing
pub fn format_sample(sample: &Sample) -> Option<String> {
    let (Some(cpu), Some(gpu), Some(volts), Some(throttled)) =
        (sample.cpu_temp, sample.gpu_temp, sample.pkg_voltage, sample.throttled)
    else {
        return None;
    };

    let mut line = format!(
        "CPU: {} \tGPU: {} \tVcore: {}",
        format_celsius(cpu),
        format_celsius(gpu),
        format_volts(volts)
    );
    if throttled {
        line.push_str(" \tThrottled: True");
    }
    Some(line)
}

fn extent_row(label: &str, extent: Option<Extent>, fmt: fn(f64) -> String) -> String {
    match extent {
        Some(Extent { min, max }) => format!("{:<8}{:>8}{:>8}\n", label, fmt(min), fmt(max)),
        None => format!("{:<8}{:>8}{:>8}\n", label, NOT_AVAILABLE, NOT_AVAILABLE),
    }
}

/// Summary table: min/max per metric, throttle events and sample count
pub fn format_summary(monitor: &Monitor) -> String {
    let mut buf = String::new();
    for heading in ["Summary", "min", "max"] {
        buf.push_str(&format!("{}{:>8}{}", BOLD, heading, RESET));
    }
    buf.push('\n');

    let celsius = |v: f64| format!("{:+.1}", v);
    let volts = |v: f64| format!("{:.4}", v);
    buf.push_str(&extent_row("CPU (°C)", monitor.cpu_temp(), celsius));
    buf.push_str(&extent_row("GPU (°C)", monitor.gpu_temp(), celsius));
    buf.push_str(&extent_row("PKG ( V)", monitor.pkg_voltage(), volts));

    let counters = monitor.counters();
    buf.push_str(&format!("\n{:>10} {}\n", "Throttles:", counters.throttle_events));
    buf.push_str(&format!("{:>10} {}\n", "Samples:", counters.reads));
    buf
}
