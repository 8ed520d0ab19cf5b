//! Cancellable periodic tick source

use std::{ops::ControlFlow, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Handle to a running ticker. Dropping the handle cancels the ticker.
#[derive(Debug)]
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stop the ticker. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("Cancelling ticker");
            }
            task.abort();
        }
    }

    /// Whether the ticker has stopped, either by cancellation or on its own
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start calling `on_tick` once per `period` until it returns
/// [`ControlFlow::Break`] or the returned handle is cancelled.
///
/// The first call happens one full `period` after start. Must be called from
/// within a Tokio runtime.
pub fn start<F>(period: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if on_tick().is_break() {
                break;
            }
        }
    });

    TickerHandle { task: Some(task) }
}
