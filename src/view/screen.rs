//! Screen model derived from the timer state

use serde::Serialize;

use super::metrics::DisplayMetrics;
use crate::state::{TimerState, INITIAL_TICKS};

const FAB_LABEL: &str = "( start )";
const FILL: char = '#';

/// Everything the countdown screen shows for one timer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenModel {
    /// Remaining ticks, zero-padded to two digits
    pub countdown_text: String,
    /// The start button is only shown while idle
    pub fab_visible: bool,
    /// Top row of the progress fill; it grows downward as ticks elapse
    pub indicator_offset: u32,
}

impl ScreenModel {
    /// Derive the screen for `state` drawn on a surface of `metrics` size
    pub fn new(state: &TimerState, metrics: &DisplayMetrics) -> Self {
        let elapsed = u64::from(state.elapsed_ticks());
        let offset = u64::from(metrics.height) * elapsed / u64::from(INITIAL_TICKS);

        Self {
            countdown_text: format!("{:02}", state.remaining_ticks),
            fab_visible: state.is_idle(),
            indicator_offset: offset as u32,
        }
    }
}

/// Draw a text frame: the progress fill, the countdown centered on the middle
/// row and the start button near the bottom while idle.
pub fn render(model: &ScreenModel, metrics: &DisplayMetrics) -> String {
    let width = metrics.width as usize;
    let height = metrics.height;
    let countdown_row = height / 2;
    // The button sits two rows from the bottom, only when that row is below the number
    let fab_row = height.checked_sub(2).filter(|&row| row > countdown_row);
    let mut frame = String::with_capacity((width + 1) * height as usize);

    for row in 0..height {
        let fill = if row >= model.indicator_offset { FILL } else { ' ' };
        let mut line: Vec<char> = std::iter::repeat(fill).take(width).collect();

        if row == countdown_row {
            overlay(&mut line, &model.countdown_text);
        }
        if model.fab_visible && fab_row == Some(row) {
            overlay(&mut line, FAB_LABEL);
        }

        frame.extend(line);
        frame.push('\n');
    }

    frame
}

fn overlay(line: &mut [char], text: &str) {
    let chars: Vec<char> = text.chars().collect();
    let start = line.len().saturating_sub(chars.len()) / 2;
    for (slot, c) in line.iter_mut().skip(start).zip(chars) {
        *slot = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RunState;

    fn running(remaining_ticks: u32) -> TimerState {
        TimerState {
            remaining_ticks,
            run_state: RunState::Running,
        }
    }

    #[test]
    fn idle_screen_shows_fab_and_empty_indicator() {
        let model = ScreenModel::new(&TimerState::idle(), &DisplayMetrics::new(40, 20));
        assert_eq!(model.countdown_text, "50");
        assert!(model.fab_visible);
        assert_eq!(model.indicator_offset, 0);
    }

    #[test]
    fn running_screen_hides_fab_and_pads_number() {
        let model = ScreenModel::new(&running(7), &DisplayMetrics::new(40, 20));
        assert_eq!(model.countdown_text, "07");
        assert!(!model.fab_visible);
    }

    #[test]
    fn indicator_tracks_elapsed_ticks() {
        let metrics = DisplayMetrics::new(40, 100);
        assert_eq!(ScreenModel::new(&running(50), &metrics).indicator_offset, 0);
        assert_eq!(ScreenModel::new(&running(25), &metrics).indicator_offset, 50);
        assert_eq!(ScreenModel::new(&running(1), &metrics).indicator_offset, 98);
    }

    #[test]
    fn render_draws_every_row() {
        let metrics = DisplayMetrics::new(12, 6);
        let model = ScreenModel::new(&TimerState::idle(), &metrics);
        let frame = render(&model, &metrics);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
        assert!(lines[3].contains("50"));
        assert!(lines[4].contains(FAB_LABEL));
    }

    #[test]
    fn countdown_survives_short_surfaces() {
        for height in 1..=4 {
            let metrics = DisplayMetrics::new(12, height);
            let model = ScreenModel::new(&TimerState::idle(), &metrics);
            let frame = render(&model, &metrics);

            assert_eq!(frame.lines().count(), height as usize);
            assert!(frame.contains("50"), "height {} lost the countdown: {:?}", height, frame);
            assert!(!frame.contains(FAB_LABEL));
        }

        let metrics = DisplayMetrics::new(12, 5);
        let frame = render(&ScreenModel::new(&TimerState::idle(), &metrics), &metrics);
        assert!(frame.contains("50"));
        assert!(frame.contains(FAB_LABEL));
    }

    #[test]
    fn render_fills_below_the_offset() {
        let metrics = DisplayMetrics::new(4, 10);
        let model = ScreenModel::new(&running(25), &metrics);
        let frame = render(&model, &metrics);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "    ");
        assert_eq!(lines[4], "    ");
        assert_eq!(lines[9], "####");
        assert!(!frame.contains(FAB_LABEL));
    }
}
