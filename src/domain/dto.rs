/// Represents a user request to change the backlight.
///
/// This is a source-neutral representation of what the user wants to do,
/// independent of where it came from (keymap, host command, boot code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightCommand {
    /// Set an absolute level (clamped to the configured maximum)
    SetLevel(u8),
    /// One level brighter
    Increase,
    /// One level darker
    Decrease,
    /// Switch off, or back on to the last non-zero level
    Toggle,
    /// Start breathing, or let the running animation settle and stop
    ToggleBreathing,
    /// Play a single breathing pulse
    Pulse,
    /// Set the breathing period scale (0 is treated as 1)
    SetBreathingPeriod(u8),
}
