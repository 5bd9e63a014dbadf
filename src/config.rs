//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters and display geometry live here so they can be
//! tuned in one place.

// Timing

/// Poll interval while waiting for a press or release edge (ms).
pub const POLL_INTERVAL_MS: u32 = 10;

/// Extra hold after a press is detected, to swallow contact bounce (ms).
pub const SETTLE_MS: u32 = 200;

/// Refresh/scan interval of the operand and selector screens (ms).
pub const SCAN_INTERVAL_MS: u32 = 50;

/// How long the result screen stays up before the next round (ms).
pub const RESULT_HOLD_MS: u32 = 10_000;

// Display

/// Text rows on the character display.
pub const DISPLAY_ROWS: usize = 2;

/// Character cells per row.
pub const DISPLAY_COLS: usize = 16;

// GPIO pin assignments (nRF52840-DK, external buttons)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Calculator buttons idle LOW (pull-down) and read
// HIGH while pressed.  The shutdown button is the on-board BUTTON4
// (active-low, pull-up).
//
//   Bit0 (MSB)     → P0.03
//   Bit1           → P0.04
//   Bit2           → P0.28
//   Bit3 (LSB)     → P0.29
//   Enter          → P0.30
//   Left           → P0.31
//   Right          → P1.01
//   Shutdown       → P0.25
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Debounce applied to the shutdown button edge (ms).
pub const SHUTDOWN_DEBOUNCE_MS: u64 = 50;

/// What ends the result screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultHold {
    /// Show the result for a fixed time (ms).
    Timed(u32),
    /// Show the result until ENTER is clicked.
    UntilEnter,
}

/// Polling cadence of the input protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub poll_ms: u32,
    pub settle_ms: u32,
    pub scan_ms: u32,
    pub result_hold: ResultHold,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        poll_ms: POLL_INTERVAL_MS,
        settle_ms: SETTLE_MS,
        scan_ms: SCAN_INTERVAL_MS,
        result_hold: ResultHold::Timed(RESULT_HOLD_MS),
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
