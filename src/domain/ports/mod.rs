pub mod pwm;
pub mod store;

pub use pwm::*;
pub use store::*;
