//! Perceptual lightness correction
//!
//! LED brightness is perceived roughly as the cube root of the duty cycle,
//! so a linear ramp of duty looks like it jumps at the dark end and stalls
//! at the bright end. [`cie_lightness`] approximates the CIE 1931 lightness
//! curve so that linear steps of the requested value look evenly spaced.
//!
//! See <http://jared.geek.nz/2013/feb/linear-led-pwm>.

use crate::config::LIGHTNESS;

/// Full-scale duty value
pub const DUTY_MAX: u16 = u16::MAX;

/// Fixed-point shift used to keep precision through the integer division
const FIXED_POINT_SHIFT: u32 = 8;

/// Map a linear duty value to a perceptually linear one.
///
/// Two segments:
/// - up to [`LIGHTNESS`]`.low_end_limit` the curve is a straight line
///   (`v / low_end_divisor`);
/// - above it the value is offset, normalized in 1/256 units, cubed and
///   scaled back, saturating at [`DUTY_MAX`].
///
/// The segments do not meet exactly: the cubic starts 33 units below the
/// end of the straight line. The curve is kept bit-exact because the LED
/// calibration was done against it.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn cie_lightness(linear: u16) -> u16 {
    if linear <= LIGHTNESS.low_end_limit {
        return linear / LIGHTNESS.low_end_divisor;
    }

    let y = ((linear as u32 + LIGHTNESS.offset) << FIXED_POINT_SHIFT)
        / (LIGHTNESS.offset + DUTY_MAX as u32);
    let y = (y * y * y) >> FIXED_POINT_SHIFT;
    if y > DUTY_MAX as u32 {
        DUTY_MAX
    } else {
        y as u16
    }
}
