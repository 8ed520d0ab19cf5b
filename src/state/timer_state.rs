//! Timer state structure and transitions

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Number of ticks a countdown starts from
pub const INITIAL_TICKS: u32 = 50;

/// Real time covered by a single tick
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the countdown is actively decrementing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => f.write_str("idle"),
            RunState::Running => f.write_str("running"),
        }
    }
}

/// The single observable value published by the timer controller.
///
/// `remaining_ticks` and `run_state` always change together so observers
/// never see one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_ticks: u32,
    pub run_state: RunState,
}

impl TimerState {
    /// Create a stopped timer at its initial value
    pub fn idle() -> Self {
        Self {
            remaining_ticks: INITIAL_TICKS,
            run_state: RunState::Idle,
        }
    }

    /// Create a freshly started timer
    pub fn running() -> Self {
        Self {
            remaining_ticks: INITIAL_TICKS,
            run_state: RunState::Running,
        }
    }

    /// Check if the countdown is decrementing
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Check if the countdown is stopped at its initial value
    pub fn is_idle(&self) -> bool {
        self.run_state == RunState::Idle
    }

    /// Advance the countdown by one tick.
    ///
    /// Returns `true` when the countdown finished on this tick, in which case
    /// the state has already been reset to [`TimerState::idle`]. Ticking an
    /// idle timer does nothing.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            *self = Self::idle();
            return true;
        }
        false
    }

    /// Number of ticks consumed since the countdown started
    pub fn elapsed_ticks(&self) -> u32 {
        INITIAL_TICKS - self.remaining_ticks.min(INITIAL_TICKS)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_at_initial_ticks() {
        let state = TimerState::default();
        assert_eq!(state.run_state, RunState::Idle);
        assert_eq!(state.remaining_ticks, INITIAL_TICKS);
        assert_eq!(state.elapsed_ticks(), 0);
    }

    #[test]
    fn tick_decrements_only_while_running() {
        let mut idle = TimerState::idle();
        assert!(!idle.tick());
        assert_eq!(idle, TimerState::idle());

        let mut running = TimerState::running();
        assert!(!running.tick());
        assert_eq!(running.remaining_ticks, INITIAL_TICKS - 1);
        assert_eq!(running.elapsed_ticks(), 1);
    }

    #[test]
    fn last_tick_resets_instead_of_stopping_at_zero() {
        let mut state = TimerState {
            remaining_ticks: 1,
            run_state: RunState::Running,
        };
        assert!(state.tick());
        assert_eq!(state, TimerState::idle());
    }

    #[test]
    fn serializes_run_state_lowercase() {
        let json = serde_json::to_value(TimerState::running()).unwrap();
        assert_eq!(json["run_state"], "running");
        assert_eq!(json["remaining_ticks"], INITIAL_TICKS);
    }
}
