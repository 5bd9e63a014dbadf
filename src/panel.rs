//! The device context: buttons, delay and display in one place.
//!
//! A `Panel` is built once at start-up and handed to every screen by
//! `&mut`.  Dropping it clears the display and releases the buttons,
//! whichever way the owner exits.

use crate::config::Timing;
use crate::debounce::Debouncer;
use crate::display::TextDisplay;
use crate::input::InputSource;
use embedded_hal_async::delay::DelayNs;

pub struct Panel<I, D, T>
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    pub keys: Debouncer<I, D>,
    pub display: T,
}

impl<I, D, T> Panel<I, D, T>
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    pub fn new(input: I, delay: D, display: T, timing: Timing) -> Self {
        Self {
            keys: Debouncer::new(input, delay, timing),
            display,
        }
    }

    /// Start a fresh screen: header on row 0, `content` on row 1.
    pub fn show(&mut self, header: &str, content: &str) {
        self.display.clear();
        self.display.write(header);
        self.display.newline();
        self.display.write(content);
    }

    /// Overwrite row 1 in place.
    pub fn update(&mut self, content: &str) {
        self.display.move_cursor(1, 0);
        self.display.write(content);
    }
}

impl<I, D, T> Drop for Panel<I, D, T>
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    fn drop(&mut self) {
        self.display.clear();
        self.keys.release();
        #[cfg(feature = "defmt")]
        defmt::info!("Panel: display cleared, inputs released");
    }
}
