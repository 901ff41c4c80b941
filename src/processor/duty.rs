//! Duty cycle arithmetic shared by the static and breathing paths

use super::lightness::{DUTY_MAX, cie_lightness};

/// Perceptual duty for a static brightness level.
///
/// Level 0 maps to 0, `levels` to full duty. Levels above `levels` are
/// clamped.
#[allow(clippy::cast_possible_truncation)]
pub fn level_duty(level: u8, levels: u8) -> u16 {
    if levels == 0 {
        return 0;
    }
    let level = u32::from(level.min(levels));
    let linear = u32::from(DUTY_MAX) * level / u32::from(levels);
    cie_lightness(linear as u16)
}

/// Perceptual duty for a breathing waveform sample at the given level.
///
/// The sample is widened to 16 bits and scaled down by `level / levels`
/// before the lightness mapping, so the pulse keeps its shape but never gets
/// brighter than the static level would be.
#[allow(clippy::cast_possible_truncation)]
pub fn breathing_duty(sample: u8, level: u8, levels: u8) -> u16 {
    if levels == 0 {
        return 0;
    }
    let linear = u32::from(sample) << 8;
    let scaled = linear / u32::from(levels) * u32::from(level.min(levels));
    cie_lightness(scaled.min(u32::from(DUTY_MAX)) as u16)
}

/// Convert a 16-bit duty fraction into a pulse width for a PWM period of
/// `period` counter ticks.
#[allow(clippy::cast_possible_truncation)]
pub fn duty_to_width(period: u32, duty: u16) -> u32 {
    (u64::from(period) * u64::from(duty) / u64::from(DUTY_MAX)) as u32
}
