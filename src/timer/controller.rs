//! Countdown controller: owns the observable timer state and its tick process

use std::{
    ops::ControlFlow,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tokio::sync::watch;
use tracing::{debug, info};

use super::ticker::{self, TickerHandle};
use crate::state::{RunState, TimerState, TICK_INTERVAL};

/// Ticker bookkeeping guarded together with state updates
#[derive(Debug, Default)]
struct Run {
    /// Bumped on every start and reset; ticks from an older generation are dropped
    generation: u64,
    ticker: Option<TickerHandle>,
}

#[derive(Debug)]
struct Shared {
    run: Mutex<Run>,
    state_tx: watch::Sender<TimerState>,
}

impl Shared {
    fn lock_run(&self) -> MutexGuard<'_, Run> {
        // Run only holds a counter and a handle; both stay valid after a panic.
        self.run.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply one tick on behalf of the ticker started for `generation`
    fn tick(&self, generation: u64) -> ControlFlow<()> {
        let run = self.lock_run();
        if run.generation != generation {
            debug!("Dropping tick from stale generation {}", generation);
            return ControlFlow::Break(());
        }

        let mut finished = false;
        self.state_tx.send_modify(|state| finished = state.tick());
        drop(run);

        if finished {
            info!("Countdown finished, timer reset");
            ControlFlow::Break(())
        } else {
            debug!("Tick: {} remaining", self.state_tx.borrow().remaining_ticks);
            ControlFlow::Continue(())
        }
    }
}

/// The countdown timer controller.
///
/// Holds a single observable [`TimerState`] and at most one running ticker.
/// Observers subscribe with [`TimerController::subscribe`]; the only command is
/// [`TimerController::toggle`].
#[derive(Debug)]
pub struct TimerController {
    shared: Arc<Shared>,
}

impl TimerController {
    /// Create an idle controller at the initial tick count
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(TimerState::idle());
        Self {
            shared: Arc::new(Shared {
                run: Mutex::new(Run::default()),
                state_tx,
            }),
        }
    }

    /// Start the countdown when idle, or cancel it and reset when running.
    ///
    /// Returns the state published by this call. Must be called from within a
    /// Tokio runtime.
    pub fn toggle(&self) -> TimerState {
        let mut run = self.shared.lock_run();
        run.generation += 1;
        if let Some(mut previous) = run.ticker.take() {
            previous.cancel();
        }

        let next = match self.shared.state_tx.borrow().run_state {
            RunState::Idle => TimerState::running(),
            RunState::Running => TimerState::idle(),
        };
        self.shared.state_tx.send_replace(next);

        if next.is_running() {
            let generation = run.generation;
            let shared = Arc::clone(&self.shared);
            run.ticker = Some(ticker::start(TICK_INTERVAL, move || shared.tick(generation)));
            info!("Countdown started from {} ticks", next.remaining_ticks);
        } else {
            info!("Countdown reset");
        }

        next
    }

    /// Stop any pending tick without touching the published state.
    ///
    /// After disposal observers receive no further updates from the tick
    /// process. Also runs on drop.
    pub fn shutdown(&self) {
        let mut run = self.shared.lock_run();
        run.generation += 1;
        if let Some(mut ticker) = run.ticker.take() {
            ticker.cancel();
            debug!("Timer controller disposed with a pending ticker");
        }
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> TimerState {
        *self.shared.state_tx.borrow()
    }

    /// Ticks left in the current countdown
    pub fn remaining_ticks(&self) -> u32 {
        self.shared.state_tx.borrow().remaining_ticks
    }

    /// Whether the countdown is currently running
    pub fn run_state(&self) -> RunState {
        self.shared.state_tx.borrow().run_state
    }

    /// Register an observer; the receiver starts at the current state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.state_tx.subscribe()
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
