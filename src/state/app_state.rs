//! Shared application state handed to the HTTP handlers

use std::{sync::Arc, time::Instant};

use crate::{timer::TimerController, view::DisplayMetrics};

/// Application state: the timer controller plus server metadata.
///
/// Built once in `main` and passed explicitly to every collaborator.
#[derive(Debug)]
pub struct AppState {
    pub controller: Arc<TimerController>,
    /// Surface size used when reporting the screen model
    pub metrics: DisplayMetrics,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create the shared state for a server bound to `host:port`
    pub fn new(controller: Arc<TimerController>, metrics: DisplayMetrics, port: u16, host: String) -> Self {
        Self {
            controller,
            metrics,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed().as_secs())
    }
}

fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_drops_leading_zero_units() {
        assert_eq!(format_uptime(7), "7s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3600 + 61), "1h 1m 1s");
    }
}
