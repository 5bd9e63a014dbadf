//! Fixed-width arithmetic/logic unit.
//!
//! Operands are 4-bit (0..=15); higher bits are ignored.  Results:
//! ```text
//! ADD  a + b              0..=30, not masked
//! SUB  (a - b) mod 32     0..=31, 5-bit wraparound (2 - 5 = 29)
//! AND  a & b              0..=15
//! OR   a | b              0..=15
//! XOR  a ^ b              0..=15
//! ```

use crate::error::Error;

/// Selected operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Add,
    Sub,
    And,
    Or,
    Xor,
}

impl Mode {
    /// Menu order.
    pub const ALL: [Mode; 5] = [Mode::Add, Mode::Sub, Mode::And, Mode::Or, Mode::Xor];

    /// Menu labels, parallel to [`Mode::ALL`].
    pub const LABELS: [&'static str; 5] = ["ADD", "SUB", "AND", "OR", "XOR"];

    pub const fn label(self) -> &'static str {
        Self::LABELS[self as usize]
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Mode::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(Error::UnknownMode(tag))
    }
}

/// Modulus of the SUB wraparound (5 bits).
const SUB_MODULUS: u8 = 32;

/// Apply `mode` to two 4-bit operands.
///
/// Only the low nibble of each operand is used.
pub fn evaluate(a: u8, b: u8, mode: Mode) -> u8 {
    let (a, b) = (a & 0x0F, b & 0x0F);
    match mode {
        Mode::Add => a + b,
        Mode::Sub => (a + SUB_MODULUS - b) % SUB_MODULUS,
        Mode::And => a & b,
        Mode::Or => a | b,
        Mode::Xor => a ^ b,
    }
}

/// Like [`evaluate`], for a raw menu tag.  Unknown tags yield 0.
pub fn evaluate_tag(a: u8, b: u8, tag: u8) -> u8 {
    Mode::try_from(tag).map_or(0, |mode| evaluate(a, b, mode))
}
