//! Text adapters for the raw source output
//!
//! Every metric is extracted the same way: split the raw text on a fixed
//! delimiter pattern and parse the fragment right after the first match.
//! Anything that does not fit yields `None` rather than an error, so a single
//! garbled reading never ends a monitoring session.
//!
//! # Examples
//!
//! ```
//! use pice::parser;
//!
//! assert_eq!(parser::parse_gpu_temp("temp=42.0'C\n"), Some(42.0));
//! assert_eq!(parser::parse_voltage("volt=0.8500V\n"), Some(0.85));
//! assert_eq!(parser::parse_throttled("throttled=0x50005\n"), Some(true));
//! assert_eq!(parser::parse_cpu_temp("55000"), Some(55.0));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

mod flags;
mod number;


pub use flags::ThrottleFlags;
pub use number::parse_int_literal;

/// Millidegrees per degree Celsius in the thermal zone file
pub const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

static GPU_TEMP_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new("temp=|'").expect("valid pattern"));
static VOLTAGE_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new("volt=|V").expect("valid pattern"));
static THROTTLE_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new("throttled=").expect("valid pattern"));

/// Force compilation of every delimiter pattern
///
/// Called once at startup so the first tick does not pay for it.
pub fn init() {
    Lazy::force(&GPU_TEMP_DELIMITER);
    Lazy::force(&VOLTAGE_DELIMITER);
    Lazy::force(&THROTTLE_DELIMITER);
}

/// Fragment following the first delimiter match, if the delimiter occurs at all
fn payload<'a>(delimiter: &Regex, raw: &'a str) -> Option<&'a str> {
    delimiter.split(raw).nth(1).map(str::trim)
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// CPU temperature in °C from the thermal zone's millidegree integer
pub fn parse_cpu_temp(raw: &str) -> Option<f64> {
    let millidegrees = raw.trim().parse::<i64>().ok()?;
    Some(millidegrees as f64 / MILLIDEGREES_PER_DEGREE)
}

/// GPU temperature in °C from `temp=<float>'C`
pub fn parse_gpu_temp(raw: &str) -> Option<f64> {
    payload(&GPU_TEMP_DELIMITER, raw).and_then(parse_finite)
}

/// Core voltage in volts from `volt=<float>V`
pub fn parse_voltage(raw: &str) -> Option<f64> {
    payload(&VOLTAGE_DELIMITER, raw).and_then(parse_finite)
}

/// Raw throttle word from `throttled=<int-literal>`
pub fn parse_throttle_flags(raw: &str) -> Option<ThrottleFlags> {
    payload(&THROTTLE_DELIMITER, raw)
        .and_then(parse_int_literal)
        .map(ThrottleFlags::new)
}

/// Whether any throttle flag is set
pub fn parse_throttled(raw: &str) -> Option<bool> {
    parse_throttle_flags(raw).map(|flags| flags.any())
}
