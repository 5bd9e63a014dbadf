//! Raw digital input channels.
//!
//! Seven buttons, all wired with a pull-down (idle = LOW, pressed = HIGH):
//!   - BIT0..BIT3 - toggle one operand digit (BIT0 is the leftmost, most
//!     significant digit on screen)
//!   - ENTER      - confirm the current operand / menu entry
//!   - LEFT/RIGHT - cycle through a menu
//!
//! The reader reports levels only; edge detection lives in `debounce`.

use embedded_hal::digital::InputPin;

/// Number of input channels.
pub const CHANNEL_COUNT: usize = 7;

/// One physical input line, by logical role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Bit0,
    Bit1,
    Bit2,
    Bit3,
    Enter,
    Left,
    Right,
}

impl Channel {
    /// Operand toggle channels, in scan order.
    pub const BITS: [Channel; 4] = [Channel::Bit0, Channel::Bit1, Channel::Bit2, Channel::Bit3];

    /// Every channel, in pin-bank order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Bit0,
        Channel::Bit1,
        Channel::Bit2,
        Channel::Bit3,
        Channel::Enter,
        Channel::Left,
        Channel::Right,
    ];

    /// Position of this channel in the pin bank.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Logical level of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Source of channel levels.
pub trait InputSource {
    /// Sample the current level of `channel`.
    fn read(&mut self, channel: Channel) -> Level;

    /// Give the underlying hardware back.  Reads afterwards return LOW.
    fn release(&mut self) {}
}

/// Seven GPIO inputs, indexed by [`Channel::index`].
pub struct PinBank<P> {
    pins: Option<[P; CHANNEL_COUNT]>,
}

impl<P> PinBank<P>
where
    P: InputPin,
{
    /// Wrap already-configured pull-down inputs, ordered as [`Channel::ALL`].
    pub fn new(pins: [P; CHANNEL_COUNT]) -> Self {
        Self { pins: Some(pins) }
    }

    /// Returns `true` until [`InputSource::release`] has been called.
    pub fn is_acquired(&self) -> bool {
        self.pins.is_some()
    }
}

impl<P> InputSource for PinBank<P>
where
    P: InputPin,
{
    fn read(&mut self, channel: Channel) -> Level {
        match self.pins.as_mut() {
            // A pin that cannot be read counts as not pressed.
            Some(pins) => Level::from(pins[channel.index()].is_high().unwrap_or(false)),
            None => Level::Low,
        }
    }

    fn release(&mut self) {
        // Dropping the pins returns them to their reset (disconnected) state.
        self.pins = None;
    }
}
