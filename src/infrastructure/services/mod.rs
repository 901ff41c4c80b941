mod backlight_state;

pub use backlight_state::AtomicBacklightState;
