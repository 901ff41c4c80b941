mod backlight_record;

pub use backlight_record::{BacklightRecord, RecordError};
