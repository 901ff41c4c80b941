#![allow(clippy::unreadable_literal)]

/// Number of backlight LEDs on the board. All of them share one brightness.
pub const BACKLIGHT_LED_COUNT: usize = 5;

/// Channel slots available in a PWM configuration
pub const PWM_CHANNELS: usize = 8;

/// Board backlight configuration
#[derive(Debug, Clone, Copy)]
pub struct BacklightConfig<const N: usize> {
    /// Highest brightness level. Level 0 is off.
    pub levels: u8,
    /// PWM channel driving each backlight LED
    pub channels: [u8; N],
    /// Breathing period used until the config store holds one
    pub default_breathing_period: u8,
}

/// Calibration of the perceptual lightness curve.
///
/// These numbers are tuned to the backlight LEDs of the board and must not be
/// changed without re-checking the visual result.
#[derive(Debug, Clone, Copy)]
pub struct LightnessCalibration {
    /// Linear duty at or below which the curve is a straight line (about 8%)
    pub low_end_limit: u16,
    /// Divisor of the straight low-end segment
    pub low_end_divisor: u16,
    /// Offset added before normalizing the cubic segment (about 16%)
    pub offset: u32,
}

pub const BACKLIGHT: BacklightConfig<BACKLIGHT_LED_COUNT> = BacklightConfig {
    levels: 3,
    channels: [1, 0, 6, 5, 7],
    default_breathing_period: 6,
};

pub const LIGHTNESS: LightnessCalibration = LightnessCalibration {
    low_end_limit: 5243,
    low_end_divisor: 9,
    offset: 10486,
};
