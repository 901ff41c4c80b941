use crate::config::BACKLIGHT;

/// Where the breathing animation should stop by itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HaltMode {
    /// Keep breathing until disabled
    #[default]
    None,
    /// Stop at the dark end of the waveform
    AtOff,
    /// Stop at the bright peak of the waveform
    AtOn,
}

impl HaltMode {
    /// Halt target for the given static level: dark when the backlight is off,
    /// bright otherwise.
    pub const fn for_level(level: u8) -> Self {
        if level == 0 { Self::AtOff } else { Self::AtOn }
    }
}

/// Represents the persisted backlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacklightSettings {
    pub level: u8,
    pub breathing: bool,
    pub breathing_period: u8,
}

impl BacklightSettings {
    /// Create settings with the board defaults
    pub const fn new() -> Self {
        Self {
            level: BACKLIGHT.levels,
            breathing: false,
            breathing_period: BACKLIGHT.default_breathing_period,
        }
    }
}

impl Default for BacklightSettings {
    fn default() -> Self {
        Self::new()
    }
}
