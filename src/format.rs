//! Text for each screen.
//!
//! Everything renders into a fixed-capacity `heapless::String`; lines
//! that live on row 1 are padded so an in-place rewrite wipes whatever a
//! longer previous value left behind.

use crate::error::Error;
use crate::operand::OperandBits;
use core::fmt::Write;
use heapless::String;

/// Rendered display line.
pub type Line = String<32>;

/// How the result is shown next to its decimal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayFormat {
    Bin,
    Oct,
    Hex,
}

impl DisplayFormat {
    /// Menu order.
    pub const ALL: [DisplayFormat; 3] =
        [DisplayFormat::Bin, DisplayFormat::Oct, DisplayFormat::Hex];

    /// Menu labels, parallel to [`DisplayFormat::ALL`].
    pub const LABELS: [&'static str; 3] = ["BIN", "OCT", "HEX"];

    pub const fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl TryFrom<u8> for DisplayFormat {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        DisplayFormat::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(Error::UnknownFormat(tag))
    }
}

/// Header for operand entry, e.g. `Input A:`.
pub fn operand_header(label: &str) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Input {label}:");
    line
}

/// Live operand row, e.g. `1010 = 10      `.
pub fn operand_line(bits: &OperandBits) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "{bits} = {:<3}    ", bits.value());
    line
}

/// Selector row, e.g. `> XOR   `.
pub fn menu_line(label: &str) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "> {label}   ");
    line
}

/// Result row in `format`.
pub fn result_line(result: u8, format: DisplayFormat) -> Line {
    let mut line = Line::new();
    let _ = match format {
        DisplayFormat::Bin => write!(line, "{result:05b} = {result}"),
        DisplayFormat::Oct => write!(line, "0o{result:o} = {result}"),
        DisplayFormat::Hex => write!(line, "0x{result:x} = {result}"),
    };
    line
}

/// Result row for a raw menu tag.  Unknown tags show plain decimal.
pub fn result_line_tag(result: u8, tag: u8) -> Line {
    match DisplayFormat::try_from(tag) {
        Ok(format) => result_line(result, format),
        Err(_) => {
            let mut line = Line::new();
            let _ = write!(line, "{result}");
            line
        }
    }
}
