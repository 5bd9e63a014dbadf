//! nibcalc - a button-driven 4-bit calculator.
//!
//! Four toggle buttons enter operand A and operand B, LEFT/RIGHT/ENTER
//! pick an operation and an output format, and a two-line character
//! display shows the result.  Then the next round starts.
//!
//! Everything here is hardware-independent and runs on the host:
//! buttons come in through [`input::InputSource`], time through
//! `embedded_hal_async::delay::DelayNs`, and the screen through
//! [`display::TextDisplay`].
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and the `embedded` feature; it supplies the nRF52840 implementations
//! of those three seams.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Core
// ═══════════════════════════════════════════════════════════════════════════

pub mod alu;
pub mod config;
pub mod error;
pub mod format;
pub mod operand;

// ═══════════════════════════════════════════════════════════════════════════
// Input protocol and session
// ═══════════════════════════════════════════════════════════════════════════

pub mod debounce;
pub mod display;
pub mod input;
pub mod panel;
pub mod selector;
pub mod session;

#[cfg(test)]
mod mock;

pub use alu::{evaluate, Mode};
pub use error::Error;
pub use format::DisplayFormat;
pub use operand::OperandBits;
pub use session::{Round, Session, Shutdown};
