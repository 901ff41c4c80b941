//! Breathing effect: waveform table and phase state machine

pub mod breathing;
pub mod waveform;

pub use breathing::{BreathingFrame, BreathingState};
