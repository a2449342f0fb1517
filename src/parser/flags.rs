/// Throttle word reported by `get_throttled`
///
/// The low nibble describes the current state, bits 16..=19 are sticky and
/// record whether the condition occurred since boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThrottleFlags(i64);

impl ThrottleFlags {
    pub const UNDER_VOLTAGE: i64 = 1 << 0;
    pub const FREQUENCY_CAPPED: i64 = 1 << 1;
    pub const THROTTLED: i64 = 1 << 2;
    pub const SOFT_TEMP_LIMIT: i64 = 1 << 3;
    pub const UNDER_VOLTAGE_OCCURRED: i64 = 1 << 16;
    pub const FREQUENCY_CAPPED_OCCURRED: i64 = 1 << 17;
    pub const THROTTLED_OCCURRED: i64 = 1 << 18;
    pub const SOFT_TEMP_LIMIT_OCCURRED: i64 = 1 << 19;

    const NAMES: [(i64, &'static str); 8] = [
        (Self::UNDER_VOLTAGE, "under-voltage"),
        (Self::FREQUENCY_CAPPED, "arm frequency capped"),
        (Self::THROTTLED, "throttled"),
        (Self::SOFT_TEMP_LIMIT, "soft temperature limit"),
        (Self::UNDER_VOLTAGE_OCCURRED, "under-voltage occurred"),
        (Self::FREQUENCY_CAPPED_OCCURRED, "arm frequency capping occurred"),
        (Self::THROTTLED_OCCURRED, "throttling occurred"),
        (Self::SOFT_TEMP_LIMIT_OCCURRED, "soft temperature limit occurred"),
    ];

    pub fn new(bits: i64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> i64 {
        self.0
    }

    /// True for any non-zero word, including bits without a known meaning
    pub fn any(&self) -> bool {
        self.0 != 0
    }

    pub fn contains(&self, flag: i64) -> bool {
        self.0 & flag == flag
    }

    pub fn is_under_voltage(&self) -> bool {
        self.contains(Self::UNDER_VOLTAGE)
    }

    pub fn is_frequency_capped(&self) -> bool {
        self.contains(Self::FREQUENCY_CAPPED)
    }

    pub fn is_throttled(&self) -> bool {
        self.contains(Self::THROTTLED)
    }

    pub fn is_soft_temp_limited(&self) -> bool {
        self.contains(Self::SOFT_TEMP_LIMIT)
    }

    /// Names of the known conditions set in this word, current state first
    pub fn active_conditions(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::fmt::Display for ThrottleFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
