//! Unified error type for nibcalc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Mode tag outside the five known operations.
    UnknownMode(u8),

    /// Format tag outside BIN / OCT / HEX.
    UnknownFormat(u8),

    /// Value does not fit in four bits.
    OperandOutOfRange(u8),

    /// The display could not be initialised.
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMode(tag) => write!(f, "unknown mode tag {tag}"),
            Error::UnknownFormat(tag) => write!(f, "unknown format tag {tag}"),
            Error::OperandOutOfRange(v) => write!(f, "operand {v} exceeds 4 bits"),
            Error::Display => f.write_str("display init failed"),
        }
    }
}
