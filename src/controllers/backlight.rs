use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver, Sender},
};

use crate::{
    app::Backlight,
    config::BacklightConfig,
    domain::{
        dto::BacklightCommand,
        entity::BacklightSettings,
        ports::{BacklightConfigStore, PwmBackend},
    },
    infrastructure::repositories::BacklightRecord,
    sync::SharedBacklight,
};

/// Command channel capacity
pub const COMMAND_CHANNEL_SIZE: usize = 4;

/// Type alias for the command channel
pub type CommandChannel = Channel<CriticalSectionRawMutex, BacklightCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for command sender
pub type CommandSender<'a> =
    Sender<'a, CriticalSectionRawMutex, BacklightCommand, COMMAND_CHANNEL_SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, BacklightCommand, COMMAND_CHANNEL_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightError {
    /// Too many commands are waiting to be processed
    Busy,
}

/// Queue a command without waiting. Safe to call from key scan code.
pub fn send_command(
    sender: &CommandSender<'_>,
    command: BacklightCommand,
) -> Result<(), BacklightError> {
    sender.try_send(command).map_err(|_| BacklightError::Busy)
}

/// Applies backlight commands to the settings store and the engine
pub struct BacklightController<'a, P: PwmBackend, S: BacklightConfigStore, const N: usize> {
    backlight: &'a SharedBacklight<'a, P, S, N>,
    store: &'a S,
    commands: CommandReceiver<'a>,
    levels: u8,
    /// Level restored by [`BacklightCommand::Toggle`]
    last_level: u8,
}

impl<'a, P: PwmBackend, S: BacklightConfigStore, const N: usize> BacklightController<'a, P, S, N> {
    pub fn new(
        backlight: &'a SharedBacklight<'a, P, S, N>,
        store: &'a S,
        commands: CommandReceiver<'a>,
        config: &BacklightConfig<N>,
    ) -> Self {
        Self {
            backlight,
            store,
            commands,
            levels: config.levels,
            last_level: config.levels,
        }
    }

    /// Restore settings from a stored record and bring up the backlight.
    ///
    /// Falls back to the board defaults when nothing valid is stored.
    pub fn on_boot(&mut self, stored: Option<&[u8]>) {
        let settings = stored
            .and_then(|bytes| BacklightRecord::from_bytes(bytes).ok())
            .map_or_else(BacklightSettings::new, |record| {
                record.to_settings(self.levels)
            });

        #[cfg(feature = "log")]
        log::info!("backlight: restoring {:?}", settings);

        self.store.set_backlight_level(settings.level);
        self.store.set_breathing(settings.breathing);
        self.store.set_breathing_period(settings.breathing_period);
        if settings.level > 0 {
            self.last_level = settings.level;
        }
        self.backlight.lock(Backlight::init_ports);
    }

    /// Current settings, encoded for non-volatile storage
    pub fn record(&self) -> BacklightRecord {
        BacklightRecord::from_settings(&BacklightSettings {
            level: self.store.backlight_level(),
            breathing: self.store.is_breathing(),
            breathing_period: self.store.breathing_period(),
        })
    }

    /// Apply a single command
    pub fn apply(&mut self, command: BacklightCommand) {
        #[cfg(feature = "log")]
        log::debug!("backlight: {:?}", command);

        let level = self.store.backlight_level();
        match command {
            BacklightCommand::SetLevel(level) => self.set_level(level),
            BacklightCommand::Increase => self.set_level(level.saturating_add(1)),
            BacklightCommand::Decrease => self.set_level(level.saturating_sub(1)),
            BacklightCommand::Toggle => {
                if level == 0 {
                    self.set_level(self.last_level);
                } else {
                    self.set_level(0);
                }
            }
            BacklightCommand::ToggleBreathing => {
                if self.store.is_breathing() {
                    self.store.set_breathing(false);
                    self.backlight.lock(Backlight::request_self_disable);
                } else {
                    self.store.set_breathing(true);
                    self.backlight.lock(Backlight::enable);
                }
            }
            BacklightCommand::Pulse => {
                self.backlight.lock(Backlight::pulse_once);
            }
            BacklightCommand::SetBreathingPeriod(period) => {
                self.store.set_breathing_period(period.max(1));
            }
        }
    }

    /// Process pending commands from the channel (non-blocking)
    pub fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            self.apply(command);
        }
    }

    /// Wait for commands and apply them, forever
    pub async fn run(&mut self) -> ! {
        loop {
            let command = self.commands.receive().await;
            self.apply(command);
        }
    }

    fn set_level(&mut self, level: u8) {
        let level = level.min(self.levels);
        if level > 0 {
            self.last_level = level;
        }
        self.store.set_backlight_level(level);
        self.backlight.lock(|backlight| backlight.set(level));
    }
}
