//! Backlight engine
//!
//! Owns the PWM backend and drives the backlight channels in two ways:
//! - static brightness via [`Backlight::set`]
//! - breathing animation, advanced by [`Backlight::on_period`] from the
//!   PWM periodic interrupt
//!
//! Breathing is running exactly when the periodic callback is installed in
//! the PWM configuration. While it runs, the animation owns the channels and
//! static writes of a non-zero level are ignored.

use crate::{
    config::BacklightConfig,
    domain::{
        entity::HaltMode,
        ports::{BacklightConfigReader, PwmBackend},
        types::{ChannelMode, PeriodicCallback, PwmConfig},
    },
    effect::{BreathingState, waveform},
    processor::{
        duty::{breathing_duty, duty_to_width, level_duty},
        lightness::DUTY_MAX,
    },
};

/// Backlight engine
///
/// Generic over `P: PwmBackend` for the hardware and `S` for the settings
/// store, which is shared with whoever changes the level.
pub struct Backlight<'a, P: PwmBackend, S: BacklightConfigReader, const N: usize> {
    /// PWM peripheral
    pwm: P,
    /// Persisted level, breathing flag and period
    store: &'a S,
    /// Configuration last handed to the peripheral
    pwm_config: PwmConfig,
    /// Hook installed while breathing
    callback: PeriodicCallback,
    /// PWM channel of each backlight LED
    channels: [u8; N],
    /// Highest brightness level
    levels: u8,
    /// Breathing phase and halt target
    breathing: BreathingState,
}

impl<'a, P: PwmBackend, S: BacklightConfigReader, const N: usize> Backlight<'a, P, S, N> {
    /// Create a new backlight engine.
    ///
    /// `callback` is the function the PWM interrupt calls each period while
    /// breathing. It is expected to end up in [`Backlight::on_period`],
    /// usually through a [`SharedBacklight`](crate::sync::SharedBacklight).
    pub fn new(
        pwm: P,
        store: &'a S,
        config: &BacklightConfig<N>,
        callback: PeriodicCallback,
    ) -> Self {
        Self {
            pwm,
            store,
            pwm_config: PwmConfig::new(),
            callback,
            channels: config.channels,
            levels: config.levels,
            breathing: BreathingState::new(),
        }
    }

    /// Configure the backlight channels, start the peripheral and restore the
    /// stored level and breathing state.
    pub fn init_ports(&mut self) {
        for &channel in &self.channels {
            if let Some(mode) = self.pwm_config.channels.get_mut(usize::from(channel)) {
                *mode = ChannelMode::ActiveHigh;
            }
        }
        self.pwm_config.callback = None;
        self.pwm.start(&self.pwm_config);

        let level = self.store.backlight_level();
        #[cfg(feature = "log")]
        log::info!(
            "backlight: init level={} breathing={}",
            level,
            self.store.is_breathing()
        );
        self.set(level);
        if self.store.is_breathing() {
            self.enable();
        }
    }

    /// Set a static brightness level.
    ///
    /// Level 0 switches the channel outputs off. Other levels are applied
    /// only when breathing is not running.
    pub fn set(&mut self, level: u8) {
        if level == 0 {
            for &channel in &self.channels {
                self.pwm.disable_channel(channel);
            }
            return;
        }

        if !self.is_active() {
            let duty = level_duty(level, self.levels);
            self.write_duty(duty);
        }
    }

    /// Start breathing from the dark start of the cycle, indefinitely.
    pub fn enable(&mut self) {
        self.breathing.restart();
        self.interrupt_enable();
    }

    /// Play one pulse that halts at the waveform peak.
    ///
    /// Starts from the dark end when the backlight is off and from the peak
    /// otherwise.
    pub fn pulse_once(&mut self) {
        if self.store.backlight_level() == 0 {
            self.breathing.seek_min();
        } else {
            self.breathing.seek_max(self.store.breathing_period());
        }
        self.breathing.set_halt_mode(HaltMode::AtOn);
        self.interrupt_enable();
    }

    /// Stop breathing now and restore the static level.
    pub fn disable(&mut self) {
        self.interrupt_disable();
        self.set(self.store.backlight_level());
    }

    /// Let the animation run to the extreme matching the static level
    /// (dark when off, peak otherwise) and stop there by itself.
    pub fn request_self_disable(&mut self) {
        let halt = HaltMode::for_level(self.store.backlight_level());
        #[cfg(feature = "log")]
        log::debug!("backlight: self disable requested ({:?})", halt);
        self.breathing.set_halt_mode(halt);
    }

    /// Whether breathing is running
    pub fn is_active(&self) -> bool {
        self.pwm_config.callback.is_some()
    }

    /// Render the next breathing frame. Called once per PWM period.
    ///
    /// When the halt target is reached the periodic hook is removed first,
    /// then the boundary frame is still written.
    pub fn on_period(&mut self) {
        let frame = self.breathing.advance(self.store.breathing_period());
        if frame.halt {
            #[cfg(feature = "log")]
            log::debug!("backlight: breathing halted at index {}", frame.index);
            self.interrupt_disable();
        }

        let duty = breathing_duty(
            waveform::sample(frame.index),
            self.store.backlight_level(),
            self.levels,
        );
        self.write_duty(duty);
    }

    /// Current halt target
    pub fn halt_mode(&self) -> HaltMode {
        self.breathing.halt_mode()
    }

    /// Current breathing phase counter
    pub fn phase(&self) -> u16 {
        self.breathing.counter()
    }

    /// The PWM backend
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Install the periodic hook and restart the peripheral with it.
    ///
    /// The peripheral is always stopped first, even when the hook is
    /// already installed, so it is never registered twice.
    fn interrupt_enable(&mut self) {
        #[cfg(feature = "log")]
        log::debug!(
            "backlight: breathing on (phase={}, halt={:?})",
            self.breathing.counter(),
            self.breathing.halt_mode()
        );
        self.pwm.stop();
        self.pwm_config.callback = Some(self.callback);
        self.pwm.start(&self.pwm_config);
        critical_section::with(|_| {
            self.pwm.enable_periodic_notification();
            let width = duty_to_width(self.pwm.period(), DUTY_MAX);
            for &channel in &self.channels {
                self.pwm.enable_channel(channel, width);
            }
        });
    }

    /// Remove the periodic hook and restart the peripheral without it.
    fn interrupt_disable(&mut self) {
        #[cfg(feature = "log")]
        log::debug!("backlight: breathing off");
        self.pwm.stop();
        self.pwm_config.callback = None;
        self.pwm.start(&self.pwm_config);
    }

    /// Drive every backlight channel with the same duty
    fn write_duty(&mut self, duty: u16) {
        let width = duty_to_width(self.pwm.period(), duty);
        critical_section::with(|_| {
            for &channel in &self.channels {
                self.pwm.enable_channel(channel, width);
            }
        });
    }
}
