//! Terminal renderer background task

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{metrics::DisplayMetrics, screen::{render, ScreenModel}};
use crate::state::TimerState;

/// Write one frame for `state`, clearing the previous one
pub fn draw<W: Write>(out: &mut W, state: &TimerState, metrics: &DisplayMetrics) -> io::Result<()> {
    let model = ScreenModel::new(state, metrics);
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(render(&model, metrics).as_bytes())?;
    out.flush()
}

/// Background task that redraws the screen on stdout for every published
/// state.
///
/// Exits once the controller owning the state channel is dropped.
pub async fn render_task(state_rx: watch::Receiver<TimerState>, metrics: DisplayMetrics) {
    info!("Starting terminal renderer at {}x{}", metrics.width, metrics.height);
    render_loop(state_rx, metrics, io::stdout()).await;
}

async fn render_loop<W: Write>(mut state_rx: watch::Receiver<TimerState>, metrics: DisplayMetrics, mut out: W) {
    loop {
        let state = *state_rx.borrow_and_update();
        if let Err(e) = draw(&mut out, &state, &metrics) {
            warn!("Failed to draw frame: {}", e);
        }

        if state_rx.changed().await.is_err() {
            debug!("Timer state channel closed, stopping renderer");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::TICK_INTERVAL, timer::TimerController};
    use tokio::time::sleep;

    fn clear_sequence() -> String {
        let mut out = Vec::new();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn draw_clears_then_writes_frame() {
        let metrics = DisplayMetrics::new(10, 4);
        let mut out = Vec::new();
        draw(&mut out, &TimerState::idle(), &metrics).unwrap();

        let text = String::from_utf8(out).unwrap();
        let clear = clear_sequence();
        assert!(text.starts_with(&clear));
        assert_eq!(text[clear.len()..].lines().count(), 4);
        assert!(text.contains("50"));
    }

    #[tokio::test(start_paused = true)]
    async fn render_loop_stops_when_controller_is_dropped() {
        let controller = TimerController::new();
        let state_rx = controller.subscribe();
        let metrics = DisplayMetrics::new(10, 6);
        let mut out = Vec::new();

        let driver = async move {
            controller.toggle();
            sleep(TICK_INTERVAL * 2 + TICK_INTERVAL / 2).await;
            drop(controller);
        };
        tokio::join!(render_loop(state_rx, metrics, &mut out), driver);

        let text = String::from_utf8(out).unwrap();
        let frames: Vec<&str> = text.split(clear_sequence().as_str()).skip(1).collect();
        // Idle, started, then two ticks
        assert_eq!(frames.len(), 4);
        assert!(frames[0].contains("50"));
        assert!(frames[3].contains("48"));
    }
}
