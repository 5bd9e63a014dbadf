//! Host-side stand-ins for the board: a virtual clock, a delay that
//! advances it, and buttons that follow a press script on that clock.

use crate::config::{ResultHold, Timing};
use crate::display::{CharGrid, TextDisplay};
use crate::input::{Channel, InputSource, Level};
use crate::panel::Panel;
use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use std::vec::Vec;

/// Board timing, with a short result hold.
pub const TEST_TIMING: Timing = Timing {
    poll_ms: 10,
    settle_ms: 200,
    scan_ms: 50,
    result_hold: ResultHold::Timed(1_000),
};

pub type TestPanel = Panel<ScriptedInput, MockDelay, CharGrid>;

/// Panel over scripted buttons and a plain grid.
pub fn panel(clock: &Clock, input: ScriptedInput) -> TestPanel {
    Panel::new(input, MockDelay::new(clock), CharGrid::new(), TEST_TIMING)
}

/// Virtual time, in nanoseconds.  Only `MockDelay` moves it forward.
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }

    fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

pub struct MockDelay {
    clock: Clock,
}

impl MockDelay {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

// Each delay yields once after moving the clock, like a timer firing, so
// futures raced against it get polled at the new time.
impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
        yield_now().await;
    }

    async fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(u64::from(us) * 1_000);
        yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(u64::from(ms) * 1_000_000);
        yield_now().await;
    }
}

/// A channel held HIGH over `[start_ms, end_ms)`.
#[derive(Clone, Copy, Debug)]
struct Hold {
    channel: Channel,
    start_ms: u64,
    end_ms: u64,
}

/// Buttons driven by a timeline of holds.
pub struct ScriptedInput {
    clock: Clock,
    holds: Vec<Hold>,
    cursor_ms: u64,
    released: Rc<Cell<bool>>,
}

impl ScriptedInput {
    /// Gap between scripted taps; comfortably longer than any scan cycle.
    pub const TAP_GAP_MS: u64 = 400;
    /// How long a scripted tap is held.
    pub const TAP_HOLD_MS: u64 = 120;

    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            holds: Vec::new(),
            cursor_ms: 0,
            released: Rc::default(),
        }
    }

    /// Hold `channel` HIGH over `[start_ms, end_ms)`.
    pub fn hold(mut self, channel: Channel, start_ms: u64, end_ms: u64) -> Self {
        self.holds.push(Hold {
            channel,
            start_ms,
            end_ms,
        });
        self.cursor_ms = self.cursor_ms.max(end_ms);
        self
    }

    /// Tap `channel` once, `TAP_GAP_MS` after the end of the last scripted hold.
    pub fn tap(self, channel: Channel) -> Self {
        let start = self.cursor_ms + Self::TAP_GAP_MS;
        self.hold(channel, start, start + Self::TAP_HOLD_MS)
    }

    /// Leave the buttons alone for `ms` past the end of the last hold.
    pub fn wait(mut self, ms: u64) -> Self {
        self.cursor_ms += ms;
        self
    }

    /// Tap several channels together.
    pub fn chord(self, channels: &[Channel]) -> Self {
        let start = self.cursor_ms + Self::TAP_GAP_MS;
        channels.iter().fold(self, |script, &ch| {
            script.hold(ch, start, start + Self::TAP_HOLD_MS)
        })
    }

    /// Tap the bit channels that are `1` in `bits` (leftmost first), then ENTER.
    pub fn enter_operand(self, bits: [u8; 4]) -> Self {
        Channel::BITS
            .iter()
            .zip(bits)
            .filter(|(_, bit)| *bit == 1)
            .fold(self, |script, (&ch, _)| script.tap(ch))
            .tap(Channel::Enter)
    }

    /// Move right `steps` times, then ENTER.
    pub fn pick(self, steps: usize) -> Self {
        (0..steps)
            .fold(self, |script, _| script.tap(Channel::Right))
            .tap(Channel::Enter)
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }

    /// Observe `release()` after the input has been moved away.
    pub fn released_flag(&self) -> Rc<Cell<bool>> {
        self.released.clone()
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self, channel: Channel) -> Level {
        if self.released.get() {
            return Level::Low;
        }
        let now = self.clock.now_ms();
        Level::from(
            self.holds
                .iter()
                .any(|h| h.channel == channel && h.start_ms <= now && now < h.end_ms),
        )
    }

    fn release(&mut self) {
        self.released.set(true);
    }
}

/// Display whose cells stay readable after the owning panel is gone.
#[derive(Clone, Default)]
pub struct SharedGrid(Rc<RefCell<CharGrid>>);

impl SharedGrid {
    pub fn get(&self) -> Ref<'_, CharGrid> {
        self.0.borrow()
    }
}

impl TextDisplay for SharedGrid {
    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }

    fn write(&mut self, text: &str) {
        self.0.borrow_mut().write(text);
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        self.0.borrow_mut().move_cursor(row, col);
    }

    fn newline(&mut self) {
        self.0.borrow_mut().newline();
    }
}
