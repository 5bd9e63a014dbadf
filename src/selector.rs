//! Cyclic menu selection (operation, output format).
//!
//! LEFT/RIGHT move through the entries with wraparound, ENTER picks the
//! current one.  One button is honoured per scan cycle, in the order
//! LEFT, RIGHT, ENTER.

use crate::display::TextDisplay;
use crate::format::menu_line;
use crate::input::{Channel, InputSource};
use crate::panel::Panel;
use embedded_hal_async::delay::DelayNs;

/// Move selection cursor one item back, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item forward, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// Run a menu screen titled `header` over `labels`; returns the chosen
/// index.  An empty menu returns 0 immediately.
pub async fn select<I, D, T>(panel: &mut Panel<I, D, T>, header: &str, labels: &[&str]) -> usize
where
    I: InputSource,
    D: DelayNs,
    T: TextDisplay,
{
    let Some(first) = labels.first() else {
        return 0;
    };
    let mut index = 0;
    panel.show(header, &menu_line(first));

    loop {
        if panel.keys.is_pressed(Channel::Left) {
            index = select_prev(index, labels.len());
            panel.update(&menu_line(labels[index]));
            panel.keys.wait_for_release(Channel::Left).await;
        } else if panel.keys.is_pressed(Channel::Right) {
            index = select_next(index, labels.len());
            panel.update(&menu_line(labels[index]));
            panel.keys.wait_for_release(Channel::Right).await;
        } else if panel.keys.is_pressed(Channel::Enter) {
            panel.keys.wait_for_release(Channel::Enter).await;
            #[cfg(feature = "defmt")]
            defmt::info!("{=str} {=str}", header, labels[index]);
            return index;
        }

        panel.keys.next_scan().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::Mode;
    use crate::format::DisplayFormat;
    use crate::mock::{panel, Clock, ScriptedInput};
    use embassy_futures::block_on;

    fn run_menu(
        clock: &Clock,
        input: ScriptedInput,
        labels: &[&str],
    ) -> (usize, crate::mock::TestPanel) {
        let mut panel = panel(clock, input);
        let index = block_on(select(&mut panel, "Select Mode:", labels));
        (index, panel)
    }

    #[test]
    fn right_n_times_returns_to_start() {
        for n in 1..=6 {
            for start in 0..n {
                let mut i = start;
                for _ in 0..n {
                    i = select_next(i, n);
                }
                assert_eq!(i, start);
            }
        }
    }

    #[test]
    fn left_then_right_is_identity() {
        for n in 1..=6 {
            for i in 0..n {
                assert_eq!(select_next(select_prev(i, n), n), i);
                assert_eq!(select_prev(select_next(i, n), n), i);
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(select_prev(0, 5), 4);
        assert_eq!(select_next(4, 5), 0);
        assert_eq!(select_prev(0, 3), 2);
        assert_eq!(select_next(2, 3), 0);
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_prev(0, 0), 0);
    }

    #[test]
    fn enter_picks_first_entry() {
        let clock = Clock::default();
        let input = ScriptedInput::new(&clock).tap(Channel::Enter);
        let (index, panel) = run_menu(&clock, input, &Mode::LABELS);
        assert_eq!(index, 0);
        assert_eq!(panel.display.trimmed(0), "Select Mode:");
        assert_eq!(panel.display.trimmed(1), "> ADD");
    }

    #[test]
    fn right_moves_forward() {
        let clock = Clock::default();
        let (index, panel) = run_menu(&clock, ScriptedInput::new(&clock).pick(4), &Mode::LABELS);
        assert_eq!(Mode::ALL[index], Mode::Xor);
        assert_eq!(panel.display.trimmed(1), "> XOR");
    }

    #[test]
    fn left_from_start_wraps_to_last() {
        let clock = Clock::default();
        let input = ScriptedInput::new(&clock)
            .tap(Channel::Left)
            .tap(Channel::Enter);
        let (index, panel) = run_menu(&clock, input, &DisplayFormat::LABELS);
        assert_eq!(DisplayFormat::ALL[index], DisplayFormat::Hex);
        assert_eq!(panel.display.trimmed(1), "> HEX");
    }

    #[test]
    fn full_lap_returns_to_start() {
        let clock = Clock::default();
        let (index, _) = run_menu(&clock, ScriptedInput::new(&clock).pick(5), &Mode::LABELS);
        assert_eq!(index, 0);
    }

    #[test]
    fn held_arrow_moves_once() {
        let clock = Clock::default();
        let input = ScriptedInput::new(&clock)
            .hold(Channel::Right, 0, 600)
            .tap(Channel::Enter);
        let (index, _) = run_menu(&clock, input, &Mode::LABELS);
        assert_eq!(index, 1);
    }

    #[test]
    fn left_wins_over_right() {
        let clock = Clock::default();
        let input = ScriptedInput::new(&clock)
            .chord(&[Channel::Left, Channel::Right])
            .tap(Channel::Enter);
        let (index, _) = run_menu(&clock, input, &Mode::LABELS);
        assert_eq!(index, 4);
    }

    #[test]
    fn arrow_wins_over_enter() {
        let clock = Clock::default();
        // RIGHT and ENTER land together; RIGHT is taken, ENTER waits for
        // the next cycle while still held.
        let input = ScriptedInput::new(&clock)
            .hold(Channel::Right, 400, 520)
            .hold(Channel::Enter, 400, 700);
        let (index, _) = run_menu(&clock, input, &Mode::LABELS);
        assert_eq!(index, 1);
    }

    #[test]
    fn empty_menu_returns_zero() {
        let clock = Clock::default();
        let (index, panel) = run_menu(&clock, ScriptedInput::new(&clock), &[]);
        assert_eq!(index, 0);
        assert!(panel.display.is_blank());
    }
}
