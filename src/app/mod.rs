mod backlight;

pub use backlight::Backlight;
