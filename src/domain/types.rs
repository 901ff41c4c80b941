use crate::config::PWM_CHANNELS;

/// Callback invoked by the PWM peripheral once per period
pub type PeriodicCallback = fn();

/// Output mode of a single PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    #[default]
    Disabled,
    ActiveHigh,
    ActiveLow,
}

/// Configuration handed to the PWM peripheral on start.
///
/// The periodic callback hook doubles as the breathing flag: breathing is
/// running exactly when `callback` is set.
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// Output mode per channel slot
    pub channels: [ChannelMode; PWM_CHANNELS],
    /// Periodic notification hook
    pub callback: Option<PeriodicCallback>,
}

impl PwmConfig {
    pub const fn new() -> Self {
        Self {
            channels: [ChannelMode::Disabled; PWM_CHANNELS],
            callback: None,
        }
    }
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::new()
    }
}
