//! GPIO button input.
//!
//! The seven calculator buttons are plain pull-down inputs sampled by the
//! session's polling loops.  The shutdown button (active-low with internal
//! pull-up) is handled by its own async task that waits for a GPIO edge,
//! debounces it, and raises the shutdown signal.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use nibcalc::config::SHUTDOWN_DEBOUNCE_MS;
use nibcalc::input::{PinBank, CHANNEL_COUNT};
use nibcalc::session::Shutdown;

static SHUTDOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Shutdown flag as seen by the session.
pub struct ShutdownRequest(&'static Signal<CriticalSectionRawMutex, ()>);

impl ShutdownRequest {
    pub fn get() -> Self {
        Self(&SHUTDOWN)
    }
}

impl Shutdown for ShutdownRequest {
    fn requested(&self) -> bool {
        self.0.signaled()
    }

    async fn wait(&self) {
        self.0.wait().await
    }
}

/// Configure the calculator buttons as pull-down inputs, ordered as
/// `Channel::ALL`.
pub fn pin_bank(pins: [AnyPin; CHANNEL_COUNT]) -> PinBank<Input<'static>> {
    PinBank::new(pins.map(|pin| Input::new(pin, Pull::Down)))
}

/// Watch the shutdown button.
///
/// Waits for the pin to go low (pressed), debounces, raises the signal
/// and exits; the pin is released with the task.
#[embassy_executor::task]
pub async fn shutdown_task(pin: AnyPin) {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(SHUTDOWN_DEBOUNCE_MS)).await;

        if btn.is_low() {
            info!("Shutdown requested, stopping session");
            SHUTDOWN.signal(());
            return;
        }
    }
}
