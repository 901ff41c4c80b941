//! Breathing waveform
//!
//! One full breathing cycle sampled in [`BREATHING_STEPS`] steps: a smooth
//! rise from dark to the peak at [`PEAK_INDEX`], then the mirrored fall back
//! to dark at [`TROUGH_INDEX`].

/// Number of samples in one breathing cycle
pub const BREATHING_STEPS: usize = 128;

/// Index of the brightest sample
pub const PEAK_INDEX: u8 = (BREATHING_STEPS / 2) as u8;

/// Index of the last (dark) sample
pub const TROUGH_INDEX: u8 = (BREATHING_STEPS - 1) as u8;

#[rustfmt::skip]
pub const BREATHING_TABLE: [u8; BREATHING_STEPS] = [
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   2,   3,   4,
      5,   6,   8,  10,  12,  15,  17,  20,  24,  28,  32,  36,  41,  46,  51,  57,
     63,  70,  76,  83,  91,  98, 106, 113, 121, 129, 138, 146, 154, 162, 170, 178,
    185, 193, 200, 207, 213, 220, 225, 231, 235, 240, 244, 247, 250, 252, 253, 254,
    255, 254, 253, 252, 250, 247, 244, 240, 235, 231, 225, 220, 213, 207, 200, 193,
    185, 178, 170, 162, 154, 146, 138, 129, 121, 113, 106,  98,  91,  83,  76,  70,
     63,  57,  51,  46,  41,  36,  32,  28,  24,  20,  17,  15,  12,  10,   8,   6,
      5,   4,   3,   2,   1,   1,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
];

/// Waveform sample at `index`, wrapped into the table
#[inline]
pub const fn sample(index: u8) -> u8 {
    BREATHING_TABLE[index as usize % BREATHING_STEPS]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_about_peak() {
        let peak = PEAK_INDEX as usize;
        for k in 1..peak {
            assert_eq!(BREATHING_TABLE[peak - k], BREATHING_TABLE[peak + k], "k = {k}");
        }
    }

    #[test]
    fn peak_is_unique_maximum() {
        assert_eq!(sample(PEAK_INDEX), 255);
        let peaks = BREATHING_TABLE.iter().filter(|&&s| s == 255).count();
        assert_eq!(peaks, 1);
    }

    #[test]
    fn ends_are_dark() {
        assert_eq!(sample(0), 0);
        assert_eq!(sample(TROUGH_INDEX), 0);
    }

    #[test]
    fn rises_then_falls() {
        let peak = PEAK_INDEX as usize;
        assert!(BREATHING_TABLE[..=peak].windows(2).all(|w| w[0] <= w[1]));
        assert!(BREATHING_TABLE[peak..].windows(2).all(|w| w[0] >= w[1]));
    }
}
