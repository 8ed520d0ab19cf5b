//! Countdown timer module
//!
//! This module contains the timer controller and the cancellable ticker that
//! drives it.

pub mod controller;
pub mod ticker;

// Re-export main types
pub use controller::TimerController;
pub use ticker::TickerHandle;
