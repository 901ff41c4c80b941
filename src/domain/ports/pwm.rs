use crate::domain::types::PwmConfig;

/// PWM peripheral driving the backlight channels
///
/// Implement this trait for the target HAL. The backlight engine is generic
/// over it, which also lets tests substitute a recording mock.
///
/// Every method may be called from the periodic callback, so implementations
/// must touch peripheral registers directly and never block.
pub trait PwmBackend {
    /// Start the peripheral with the given configuration
    fn start(&mut self, config: &PwmConfig);

    /// Stop the peripheral, dropping the periodic hook
    fn stop(&mut self);

    /// Counter ticks in one PWM period
    fn period(&self) -> u32;

    /// Drive a channel with the given pulse width (in counter ticks)
    fn enable_channel(&mut self, channel: u8, width: u32);

    /// Turn a channel output off
    fn disable_channel(&mut self, channel: u8);

    /// Start calling the configured periodic hook every period
    fn enable_periodic_notification(&mut self);
}
