//! Output processing
//!
//! Turns requested brightness into what is written to the PWM channels:
//! - perceptual lightness correction
//! - level scaling and duty-to-width conversion

pub mod duty;
pub mod lightness;

pub use lightness::cie_lightness;
