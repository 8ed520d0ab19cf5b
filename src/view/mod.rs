//! Screen module
//!
//! This module turns timer states into what the countdown screen shows and
//! draws it to a terminal.

pub mod metrics;
pub mod renderer;
pub mod screen;

// Re-export main types
pub use metrics::DisplayMetrics;
pub use renderer::render_task;
pub use screen::{render, ScreenModel};
