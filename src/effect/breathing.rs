//! Breathing phase state machine
//!
//! Tracks where in the waveform the animation is and whether it should stop
//! at one of the waveform extremes. Hardware is not touched here; the engine
//! feeds [`BreathingState::advance`] once per periodic callback and acts on
//! the returned [`BreathingFrame`].

use crate::domain::entity::HaltMode;

use super::waveform::{BREATHING_STEPS, PEAK_INDEX, TROUGH_INDEX};

/// Phase counter steps per unit of breathing period
const STEPS_PER_PERIOD: u32 = 256;

/// Result of advancing the phase by one callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingFrame {
    /// Waveform index to render
    pub index: u8,
    /// Whether the animation has reached its halt target
    pub halt: bool,
}

/// Phase counter and halt target of the breathing animation
#[derive(Debug, Clone, Default)]
pub struct BreathingState {
    counter: u16,
    halt: HaltMode,
}

impl BreathingState {
    pub const fn new() -> Self {
        Self {
            counter: 0,
            halt: HaltMode::None,
        }
    }

    /// Current phase counter
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// Current halt target
    pub const fn halt_mode(&self) -> HaltMode {
        self.halt
    }

    pub fn set_halt_mode(&mut self, halt: HaltMode) {
        self.halt = halt;
    }

    /// Restart the cycle at the dark start of the waveform and keep running
    pub fn restart(&mut self) {
        self.counter = 0;
        self.halt = HaltMode::None;
    }

    /// Move the phase to the dark start of the waveform
    pub fn seek_min(&mut self) {
        self.counter = 0;
    }

    /// Move the phase to the waveform peak
    #[allow(clippy::cast_possible_truncation)]
    pub fn seek_max(&mut self, period: u8) {
        self.counter = (cycle_length(period) / 2) as u16;
    }

    /// Advance one callback and report which sample to render.
    ///
    /// The counter wraps after one full cycle (`period * 256` steps) so the
    /// index never jumps when the 16-bit counter would overflow.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, period: u8) -> BreathingFrame {
        let cycle = cycle_length(period);
        let interval = cycle / BREATHING_STEPS as u32;
        self.counter = ((u32::from(self.counter) + 1) % cycle) as u16;
        let index = (u32::from(self.counter) / interval % BREATHING_STEPS as u32) as u8;

        let halt = match self.halt {
            HaltMode::None => false,
            HaltMode::AtOn => index == PEAK_INDEX,
            HaltMode::AtOff => index == TROUGH_INDEX,
        };

        BreathingFrame { index, halt }
    }
}

/// Phase counter steps in one full breathing cycle. A zero period is
/// treated as 1.
fn cycle_length(period: u8) -> u32 {
    u32::from(period.max(1)) * STEPS_PER_PERIOD
}
