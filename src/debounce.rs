//! Edge detection with settle delay.
//!
//! All waits are sleep-poll loops on the calling task: the channel is
//! sampled, and if the condition is not met the task sleeps for
//! `poll_ms` before sampling again.  A channel stuck at one level blocks
//! the caller forever; there is no timeout.

use crate::config::Timing;
use crate::input::{Channel, InputSource, Level};
use embedded_hal_async::delay::DelayNs;

/// Input source plus the delay used to pace polling.
pub struct Debouncer<I, D> {
    input: I,
    delay: D,
    timing: Timing,
}

impl<I, D> Debouncer<I, D>
where
    I: InputSource,
    D: DelayNs,
{
    pub fn new(input: I, delay: D, timing: Timing) -> Self {
        Self {
            input,
            delay,
            timing,
        }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Sample `channel` once.
    pub fn is_pressed(&mut self, channel: Channel) -> bool {
        self.input.read(channel).is_high()
    }

    /// Wait until `channel` reads HIGH, then hold for the settle interval.
    pub async fn wait_for_press(&mut self, channel: Channel) {
        while self.input.read(channel) == Level::Low {
            self.delay.delay_ms(self.timing.poll_ms).await;
        }
        self.delay.delay_ms(self.timing.settle_ms).await;
    }

    /// Wait until `channel` reads LOW.  No settle: the next scan re-polls.
    pub async fn wait_for_release(&mut self, channel: Channel) {
        while self.input.read(channel) == Level::High {
            self.delay.delay_ms(self.timing.poll_ms).await;
        }
    }

    /// One full press-and-release of `channel`.
    pub async fn click(&mut self, channel: Channel) {
        self.wait_for_press(channel).await;
        self.wait_for_release(channel).await;
    }

    /// Sleep for one UI scan cycle.
    pub async fn next_scan(&mut self) {
        self.delay.delay_ms(self.timing.scan_ms).await;
    }

    pub async fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms).await;
    }

    /// Hand the input hardware back.
    pub fn release(&mut self) {
        self.input.release();
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}
