/// Reader interface for the persisted backlight settings
///
/// Read from both the foreground and the periodic callback, so it takes
/// `&self` and must not block.
pub trait BacklightConfigReader {
    /// Current backlight level (0 = off)
    fn backlight_level(&self) -> u8;

    /// Whether breathing is enabled
    fn is_breathing(&self) -> bool;

    /// Breathing period scale
    fn breathing_period(&self) -> u8;
}

/// Writer interface for the persisted backlight settings
pub trait BacklightConfigWriter {
    /// Set the backlight level
    fn set_backlight_level(&self, level: u8);

    /// Set whether breathing is enabled
    fn set_breathing(&self, breathing: bool);

    /// Set the breathing period scale
    fn set_breathing_period(&self, period: u8);
}

/// Trait for a readable and writable backlight config store
pub trait BacklightConfigStore: BacklightConfigReader + BacklightConfigWriter + Sync {}

impl<T: BacklightConfigReader + BacklightConfigWriter + Sync> BacklightConfigStore for T {}
