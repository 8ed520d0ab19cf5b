//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::TimerState, view::ScreenModel};

/// Response for the toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
}

impl ToggleResponse {
    /// Describe the state a toggle just produced
    pub fn from_state(state: TimerState) -> Self {
        let message = if state.is_running() {
            "Countdown started"
        } else {
            "Countdown reset"
        };

        Self {
            status: state.run_state.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
            state,
        }
    }
}

/// Status response with the derived screen model
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub state: TimerState,
    pub screen: ScreenModel,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
