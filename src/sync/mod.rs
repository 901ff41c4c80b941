mod shared_backlight;

pub use shared_backlight::SharedBacklight;
