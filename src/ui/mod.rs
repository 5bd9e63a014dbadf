//! Board glue - OLED display + physical buttons.
//!
//! Implements the library's hardware seams for the nRF52840 target.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, driven as a 2×16 character display
//! - **Buttons**: 7 calculator buttons (pull-down) + 1 shutdown button (pull-up)

pub mod buttons;
pub mod display;
