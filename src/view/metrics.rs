//! Display size detection

use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Size of the drawing surface in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub width: u32,
    pub height: u32,
}

impl DisplayMetrics {
    /// Create metrics for a surface of `width` columns by `height` rows
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Ask the terminal for its size, using `fallback` when it cannot report
    /// one or reports a zero dimension.
    pub fn detect(fallback: DisplayMetrics) -> Self {
        Self::from_terminal_size(fallback, crossterm::terminal::size())
    }

    fn from_terminal_size(fallback: DisplayMetrics, size: io::Result<(u16, u16)>) -> Self {
        let metrics = match size {
            Ok((columns, rows)) => Self {
                width: if columns > 0 { u32::from(columns) } else { fallback.width },
                height: if rows > 0 { u32::from(rows) } else { fallback.height },
            },
            Err(e) => {
                debug!("Terminal size unavailable ({}), using {}x{}", e, fallback.width, fallback.height);
                fallback
            }
        };
        debug!("Display metrics: {}x{}", metrics.width, metrics.height);
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: DisplayMetrics = DisplayMetrics { width: 40, height: 20 };

    #[test]
    fn prefers_terminal_size() {
        let metrics = DisplayMetrics::from_terminal_size(FALLBACK, Ok((120, 30)));
        assert_eq!(metrics, DisplayMetrics::new(120, 30));
    }

    #[test]
    fn falls_back_when_terminal_errors() {
        let err = io::Error::new(io::ErrorKind::Unsupported, "not a tty");
        assert_eq!(DisplayMetrics::from_terminal_size(FALLBACK, Err(err)), FALLBACK);
    }

    #[test]
    fn falls_back_per_zero_dimension() {
        let metrics = DisplayMetrics::from_terminal_size(FALLBACK, Ok((0, 12)));
        assert_eq!(metrics, DisplayMetrics::new(40, 12));
    }
}
