use core::sync::atomic::{AtomicU8, Ordering};

use crate::domain::entity::BacklightSettings;
use crate::domain::ports::{BacklightConfigReader, BacklightConfigWriter};

/// Atomic backlight settings
/// Uses atomics for lock-free access from both the key handlers and the
/// periodic callback.
#[derive(Debug)]
pub struct AtomicBacklightState {
    level: AtomicU8,
    breathing: AtomicU8,
    breathing_period: AtomicU8,
}

impl AtomicBacklightState {
    pub const fn new() -> Self {
        Self::from_settings(&BacklightSettings::new())
    }

    pub const fn from_settings(settings: &BacklightSettings) -> Self {
        Self {
            level: AtomicU8::new(settings.level),
            breathing: AtomicU8::new(if settings.breathing { 1 } else { 0 }),
            breathing_period: AtomicU8::new(settings.breathing_period),
        }
    }

    /// Snapshot of the current settings
    pub fn get(&self) -> BacklightSettings {
        BacklightSettings {
            level: self.level.load(Ordering::Relaxed),
            breathing: self.breathing.load(Ordering::Relaxed) != 0,
            breathing_period: self.breathing_period.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicBacklightState {
    fn default() -> Self {
        Self::new()
    }
}

impl BacklightConfigReader for AtomicBacklightState {
    fn backlight_level(&self) -> u8 {
        self.level.load(Ordering::Relaxed)
    }

    fn is_breathing(&self) -> bool {
        self.breathing.load(Ordering::Relaxed) != 0
    }

    fn breathing_period(&self) -> u8 {
        self.breathing_period.load(Ordering::Relaxed)
    }
}

impl BacklightConfigWriter for AtomicBacklightState {
    fn set_backlight_level(&self, level: u8) {
        self.level.store(level, Ordering::Relaxed);
    }

    fn set_breathing(&self, breathing: bool) {
        self.breathing.store(u8::from(breathing), Ordering::Relaxed);
    }

    fn set_breathing_period(&self, period: u8) {
        self.breathing_period.store(period, Ordering::Relaxed);
    }
}
