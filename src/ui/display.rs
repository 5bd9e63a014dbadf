//! SSD1306 OLED display wrapper.
//!
//! The panel is driven as a two-line character display: a `CharGrid`
//! holds the cells, and every change is redrawn with a 6×10 font and
//! flushed over I²C.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use nibcalc::config::DISPLAY_ROWS;
use nibcalc::display::{CharGrid, TextDisplay};
use nibcalc::Error;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Driver<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Baseline of the first text row, and spacing between rows (pixels).
const FIRST_BASELINE: i32 = 10;
const ROW_PITCH: i32 = 14;

/// Character display on top of the OLED.
pub struct Oled<I2C> {
    driver: Driver<I2C>,
    grid: CharGrid,
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 display and clear the screen.
    pub fn init(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().map_err(|_| Error::Display)?;

        let mut oled = Self {
            driver,
            grid: CharGrid::new(),
        };
        oled.refresh();
        Ok(oled)
    }

    /// Redraw and flush if any cell changed.
    fn refresh(&mut self) {
        if !self.grid.take_dirty() {
            return;
        }
        self.driver.clear_buffer();

        for row in 0..DISPLAY_ROWS {
            let y = FIRST_BASELINE + row as i32 * ROW_PITCH;
            let _ = Text::new(self.grid.line(row), Point::new(0, y), text_style())
                .draw(&mut self.driver);
        }

        let _ = self.driver.flush();
    }
}

impl<I2C> TextDisplay for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.grid.clear();
        self.refresh();
    }

    fn write(&mut self, text: &str) {
        self.grid.write(text);
        self.refresh();
    }

    fn move_cursor(&mut self, row: u8, col: u8) {
        self.grid.move_cursor(row, col);
    }

    fn newline(&mut self) {
        self.grid.newline();
    }
}
