/// Pseudo-file exposing the SoC temperature in millidegrees Celsius
pub const DEFAULT_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Firmware query tool shipped with Raspberry Pi OS
pub const DEFAULT_FIRMWARE_COMMAND: &str = "vcgencmd";

/// Subcommand reporting the throttle flag word
pub const GET_THROTTLED: &str = "get_throttled";

/// Subcommand reporting the GPU temperature
pub const MEASURE_TEMP: &str = "measure_temp";

/// Subcommand reporting the core voltage
pub const MEASURE_VOLTS: &str = "measure_volts";
