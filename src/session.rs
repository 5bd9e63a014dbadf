//! Session controller - one calculator round after another.
//!
//! ```text
//! ENTER_A → ENTER_B → SELECT_MODE → EVALUATE → SELECT_FORMAT → DISPLAY
//!    ↑                                                            │
//!    └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each round is raced against the shutdown request, so a stop lands at
//! the next sleep of whichever screen is active.  When the loop ends the
//! session's `Panel` is dropped, which clears the display and releases the
//! buttons.

use crate::alu::{evaluate_tag, Mode};
use crate::config::ResultHold;
use crate::display::TextDisplay;
use crate::format::{result_line_tag, DisplayFormat};
use crate::input::{Channel, InputSource};
use crate::operand::{accumulate_bits, OperandBits};
use crate::panel::Panel;
use crate::selector;
use core::future::poll_fn;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::Poll;
use embassy_futures::select::{select, Either};
use embedded_hal_async::delay::DelayNs;

/// Operator-initiated stop.
#[allow(async_fn_in_trait)]
pub trait Shutdown {
    fn requested(&self) -> bool;

    /// Resolve once a stop has been requested.
    ///
    /// The default re-checks `requested` every time the executor polls it.
    /// Sources that can wake their waiter should override this.
    async fn wait(&self) {
        poll_fn(|cx| {
            if self.requested() {
                Poll::Ready(())
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }
}

impl Shutdown for AtomicBool {
    fn requested(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Everything gathered and computed during one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Round {
    pub a: OperandBits,
    pub b: OperandBits,
    pub mode: Mode,
    pub result: u8,
    pub format: DisplayFormat,
}

/// Owns the device context for the lifetime of the program.
pub struct Session<I, D, T>
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    panel: Panel<I, D, T>,
}

impl<I, D, T> Session<I, D, T>
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    pub fn new(panel: Panel<I, D, T>) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &Panel<I, D, T> {
        &self.panel
    }

    /// Run rounds until `shutdown` is requested, then tear down.
    ///
    /// A round in progress is abandoned at its next await point.  Returns
    /// the number of completed rounds.
    pub async fn run<S>(mut self, shutdown: &S) -> u32
    where
        S: Shutdown + ?Sized,
    {
        let mut rounds = 0;
        while !shutdown.requested() {
            match select(self.round(), shutdown.wait()).await {
                Either::First(_round) => rounds += 1,
                Either::Second(()) => break,
            }
        }
        #[cfg(feature = "defmt")]
        defmt::info!("Session: shutdown after {=u32} rounds", rounds);
        rounds
    }

    /// One full round, ending after the result screen.
    pub async fn round(&mut self) -> Round {
        let a = accumulate_bits(&mut self.panel, "A").await;
        let b = accumulate_bits(&mut self.panel, "B").await;

        let mode_tag = selector::select(&mut self.panel, "Select Mode:", &Mode::LABELS).await;
        let mode_tag = u8::try_from(mode_tag).unwrap_or(u8::MAX);
        let result = evaluate_tag(a.value(), b.value(), mode_tag);

        let format_tag =
            selector::select(&mut self.panel, "Output Format:", &DisplayFormat::LABELS).await;
        let format_tag = u8::try_from(format_tag).unwrap_or(u8::MAX);
        self.panel.show("Result:", &result_line_tag(result, format_tag));

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Round: {=u8} {=u8} mode={=u8} -> {=u8}",
            a.value(),
            b.value(),
            mode_tag,
            result
        );

        self.hold_result().await;

        Round {
            a,
            b,
            // The selector only returns in-range indices.
            mode: Mode::try_from(mode_tag).unwrap_or(Mode::Add),
            result,
            format: DisplayFormat::try_from(format_tag).unwrap_or(DisplayFormat::Bin),
        }
    }

    async fn hold_result(&mut self) {
        match self.panel.keys.timing().result_hold {
            ResultHold::Timed(ms) => self.panel.keys.sleep_ms(ms).await,
            ResultHold::UntilEnter => self.panel.keys.click(Channel::Enter).await,
        }
    }
}
