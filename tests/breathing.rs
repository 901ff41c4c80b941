use embassy_futures::{block_on, select::select, yield_now};

use tp69_backlight::{
    AtomicBacklightState, Backlight, BacklightCommand, BacklightConfigReader,
    BacklightConfigWriter, BacklightController, BacklightRecord, BacklightSettings,
    CommandChannel, PwmBackend, PwmConfig, SharedBacklight, cie_lightness,
    config::{BACKLIGHT, BACKLIGHT_LED_COUNT, PWM_CHANNELS},
    processor::duty::duty_to_width,
};

const PERIOD: u32 = 4096;

#[derive(Debug, Default)]
struct BoardPwm {
    config: Option<PwmConfig>,
    widths: [Option<u32>; PWM_CHANNELS],
}

impl BoardPwm {
    fn backlight_widths(&self) -> Vec<Option<u32>> {
        BACKLIGHT
            .channels
            .iter()
            .map(|&channel| self.widths[usize::from(channel)])
            .collect()
    }
}

impl PwmBackend for BoardPwm {
    fn start(&mut self, config: &PwmConfig) {
        self.config = Some(*config);
    }

    fn stop(&mut self) {
        self.widths = [None; PWM_CHANNELS];
    }

    fn period(&self) -> u32 {
        PERIOD
    }

    fn enable_channel(&mut self, channel: u8, width: u32) {
        self.widths[usize::from(channel)] = Some(width);
    }

    fn disable_channel(&mut self, channel: u8) {
        self.widths[usize::from(channel)] = None;
    }

    fn enable_periodic_notification(&mut self) {}
}

static STORE: AtomicBacklightState = AtomicBacklightState::new();
static SHARED: SharedBacklight<'static, BoardPwm, AtomicBacklightState, BACKLIGHT_LED_COUNT> =
    SharedBacklight::new();

fn breathing_callback() {
    SHARED.on_period();
}

/// Fire the periodic interrupt the way the timer would: only while the
/// callback is installed.
fn fire_interrupt() -> bool {
    let callback = SHARED
        .lock(|backlight| backlight.pwm().config.and_then(|config| config.callback))
        .flatten();
    match callback {
        Some(callback) => {
            callback();
            true
        }
        None => false,
    }
}

#[test]
fn interrupt_drives_pulse_from_static_singleton() {
    STORE.set_backlight_level(0);
    STORE.set_breathing_period(1);
    SHARED.init(Backlight::new(
        BoardPwm::default(),
        &STORE,
        &BACKLIGHT,
        breathing_callback,
    ));
    SHARED.lock(Backlight::init_ports);
    assert!(!SHARED.is_active());

    SHARED.lock(Backlight::pulse_once);
    let mut interrupts = 0;
    while fire_interrupt() {
        interrupts += 1;
    }

    // index 64 is reached at counter 64 * 2
    assert_eq!(interrupts, 128);
    assert!(!SHARED.is_active());
    let widths = SHARED
        .lock(|backlight| backlight.pwm().backlight_widths())
        .unwrap();
    // level 0 scales the pulse down to nothing
    assert_eq!(widths, vec![Some(0); BACKLIGHT_LED_COUNT]);
}

fn noop_callback() {}

#[test]
fn stored_record_survives_reboot() {
    let record = {
        let store = AtomicBacklightState::new();
        let shared = SharedBacklight::new();
        shared.init(Backlight::new(
            BoardPwm::default(),
            &store,
            &BACKLIGHT,
            noop_callback,
        ));
        let channel = CommandChannel::new();
        let mut controller =
            BacklightController::new(&shared, &store, channel.receiver(), &BACKLIGHT);
        controller.on_boot(None);
        controller.apply(BacklightCommand::SetLevel(1));
        controller.apply(BacklightCommand::SetBreathingPeriod(4));
        controller.record()
    };

    let store = AtomicBacklightState::new();
    let shared = SharedBacklight::new();
    shared.init(Backlight::new(
        BoardPwm::default(),
        &store,
        &BACKLIGHT,
        noop_callback,
    ));
    let channel = CommandChannel::new();
    let mut controller = BacklightController::new(&shared, &store, channel.receiver(), &BACKLIGHT);
    controller.on_boot(Some(record.as_bytes()));

    assert_eq!(
        store.get(),
        BacklightSettings {
            level: 1,
            breathing: false,
            breathing_period: 4,
        }
    );
    let expected = duty_to_width(PERIOD, cie_lightness(0xFFFF / 3));
    let widths = shared
        .lock(|backlight| backlight.pwm().backlight_widths())
        .unwrap();
    assert_eq!(widths, vec![Some(expected); BACKLIGHT_LED_COUNT]);
}

#[test]
fn corrupted_record_falls_back_to_defaults() {
    let store = AtomicBacklightState::new();
    store.set_backlight_level(0);
    let shared = SharedBacklight::new();
    shared.init(Backlight::new(
        BoardPwm::default(),
        &store,
        &BACKLIGHT,
        noop_callback,
    ));
    let channel = CommandChannel::new();
    let mut controller = BacklightController::new(&shared, &store, channel.receiver(), &BACKLIGHT);

    controller.on_boot(Some(&[0xFF; BacklightRecord::SIZE]));
    assert_eq!(store.get(), BacklightSettings::default());
}

#[test]
fn async_runner_applies_sent_commands() {
    let store = AtomicBacklightState::new();
    let shared = SharedBacklight::new();
    shared.init(Backlight::new(
        BoardPwm::default(),
        &store,
        &BACKLIGHT,
        noop_callback,
    ));
    let channel = CommandChannel::new();
    let sender = channel.sender();
    let mut controller = BacklightController::new(&shared, &store, channel.receiver(), &BACKLIGHT);
    controller.on_boot(None);

    block_on(select(controller.run(), async {
        sender.send(BacklightCommand::Decrease).await;
        sender.send(BacklightCommand::ToggleBreathing).await;
        yield_now().await;
    }));

    assert_eq!(store.backlight_level(), BACKLIGHT.levels - 1);
    assert!(store.is_breathing());
    assert!(shared.is_active());
    let widths = shared
        .lock(|backlight| backlight.pwm().backlight_widths())
        .unwrap();
    let full = duty_to_width(PERIOD, u16::MAX);
    assert_eq!(widths, vec![Some(full); BACKLIGHT_LED_COUNT]);
}
