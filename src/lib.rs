//! Keyboard backlight brightness and breathing animation.
//!
//! The [`Backlight`] engine drives every backlight LED channel of a hardware
//! PWM peripheral with the same duty. Static levels go through
//! [`Backlight::set`]; the breathing animation is advanced once per PWM
//! period by [`Backlight::on_period`], called from the periodic interrupt
//! through a [`SharedBacklight`].
#![no_std]

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod effect;
pub mod infrastructure;
pub mod processor;
pub mod sync;

pub use app::Backlight;
pub use controllers::{BacklightController, CommandChannel, send_command};
pub use domain::dto::BacklightCommand;
pub use domain::entity::{BacklightSettings, HaltMode};
pub use domain::ports::{BacklightConfigReader, BacklightConfigWriter, PwmBackend};
pub use domain::types::{ChannelMode, PeriodicCallback, PwmConfig};
pub use infrastructure::repositories::BacklightRecord;
pub use infrastructure::services::AtomicBacklightState;
pub use processor::cie_lightness;
pub use sync::SharedBacklight;
