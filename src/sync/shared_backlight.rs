use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

use crate::app::Backlight;
use crate::domain::ports::{BacklightConfigReader, PwmBackend};

/// Interrupt-safe home for the backlight engine.
///
/// Meant to live in a `static` so both the foreground code and the PWM
/// periodic interrupt can reach the engine. Every access runs inside a
/// critical section, so the interrupt never observes a half-finished
/// reconfiguration.
///
/// ```rust,ignore
/// static BACKLIGHT: SharedBacklight<'static, BoardPwm, AtomicBacklightState, BACKLIGHT_LED_COUNT> =
///     SharedBacklight::new();
///
/// fn breathing_callback() {
///     BACKLIGHT.on_period();
/// }
/// ```
pub struct SharedBacklight<'a, P: PwmBackend, S: BacklightConfigReader, const N: usize> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Option<Backlight<'a, P, S, N>>>>,
}

impl<'a, P: PwmBackend, S: BacklightConfigReader, const N: usize> SharedBacklight<'a, P, S, N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install the engine. Replaces any previously installed one.
    pub fn init(&self, backlight: Backlight<'a, P, S, N>) {
        self.inner.lock(|cell| {
            cell.borrow_mut().replace(backlight);
        });
    }

    /// Run `f` with exclusive access to the engine.
    ///
    /// Returns `None` when no engine has been installed yet.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Backlight<'a, P, S, N>) -> R) -> Option<R> {
        self.inner.lock(|cell| cell.borrow_mut().as_mut().map(f))
    }

    /// Entry point for the PWM periodic interrupt
    pub fn on_period(&self) {
        self.lock(Backlight::on_period);
    }

    /// Whether breathing is running; `false` before initialization
    pub fn is_active(&self) -> bool {
        self.lock(|backlight| backlight.is_active()).unwrap_or(false)
    }
}

impl<P: PwmBackend, S: BacklightConfigReader, const N: usize> Default
    for SharedBacklight<'_, P, S, N>
{
    fn default() -> Self {
        Self::new()
    }
}
