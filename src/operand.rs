//! Operand entry: four toggle buttons build a 4-bit value.
//!
//! Each scan cycle checks BIT0..BIT3 in order; a HIGH channel flips its
//! digit and the scan waits for that button to be let go before moving
//! on, so a held button counts once.  ENTER (checked last) confirms.
//! There is no timeout.

use crate::display::TextDisplay;
use crate::error::Error;
use crate::format::{operand_header, operand_line};
use crate::input::{Channel, InputSource};
use crate::panel::Panel;
use core::fmt;
use embedded_hal_async::delay::DelayNs;

/// Number of digits in an operand.
pub const OPERAND_BITS: usize = 4;

/// Four binary digits, most significant first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperandBits {
    digits: [u8; OPERAND_BITS],
}

impl OperandBits {
    /// All digits zero.
    pub const fn new() -> Self {
        Self {
            digits: [0; OPERAND_BITS],
        }
    }

    /// Build from digits (most significant first).  Only the low bit of
    /// each entry is kept.
    pub fn from_digits(digits: [u8; OPERAND_BITS]) -> Self {
        Self {
            digits: digits.map(|d| d & 1),
        }
    }

    /// Flip the digit at `position` (0 = leftmost).
    pub fn toggle(&mut self, position: usize) {
        self.digits[position] ^= 1;
    }

    pub fn digits(&self) -> [u8; OPERAND_BITS] {
        self.digits
    }

    /// Unsigned value, 0..=15.
    pub fn value(&self) -> u8 {
        self.digits.iter().fold(0, |acc, &d| (acc << 1) | d)
    }
}

impl TryFrom<u8> for OperandBits {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 0x0F {
            return Err(Error::OperandOutOfRange(value));
        }
        Ok(Self::from_digits([
            (value >> 3) & 1,
            (value >> 2) & 1,
            (value >> 1) & 1,
            value & 1,
        ]))
    }
}

impl fmt::Display for OperandBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            f.write_str(if d == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Run the operand screen for `label` until ENTER is pressed.
pub async fn accumulate_bits<I, D, T>(panel: &mut Panel<I, D, T>, label: &str) -> OperandBits
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    let mut bits = OperandBits::new();
    panel.show(&operand_header(label), &operand_line(&bits));

    loop {
        panel.update(&operand_line(&bits));

        for (position, &channel) in Channel::BITS.iter().enumerate() {
            if panel.keys.is_pressed(channel) {
                bits.toggle(position);
                panel.keys.wait_for_release(channel).await;
            }
        }

        if panel.keys.is_pressed(Channel::Enter) {
            panel.keys.wait_for_release(Channel::Enter).await;
            #[cfg(feature = "defmt")]
            defmt::info!("Operand {=str}: {=u8}", label, bits.value());
            return bits;
        }

        panel.keys.next_scan().await;
    }
}
