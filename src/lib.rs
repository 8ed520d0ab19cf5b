//! Countdown FAB - A single-screen countdown timer
//!
//! This library provides a countdown timer controller with one observable
//! state value, the screen model derived from it, and an HTTP surface for
//! remote collaborators.

pub mod api;
pub mod config;
pub mod state;
pub mod timer;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::{AppState, RunState, TimerState};
pub use timer::TimerController;
pub use utils::signals::shutdown_signal;
