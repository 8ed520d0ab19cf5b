//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::responses::{HealthResponse, StatusResponse, ToggleResponse};
use crate::{
    state::{AppState, TimerState},
    view::ScreenModel,
};

/// Handle POST /toggle - Start the countdown, or reset it when running
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Json<ToggleResponse> {
    let next = state.controller.toggle();
    info!("Toggle endpoint called - timer is now {}", next.run_state);
    Json(ToggleResponse::from_state(next))
}

/// Handle GET /status - Return the timer state and what the screen shows
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer_state = state.controller.snapshot();

    Json(StatusResponse {
        state: timer_state,
        screen: ScreenModel::new(&timer_state, &state.metrics),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle GET /events - Stream every published timer state
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Events subscriber connected");
    let state_rx = state.controller.subscribe();
    Sse::new(state_events(state_rx)).keep_alive(KeepAlive::default())
}

/// Emit the current state first, then one event per change until the
/// controller goes away.
fn state_events(state_rx: watch::Receiver<TimerState>) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold((state_rx, true), |(mut state_rx, first)| async move {
        if !first && state_rx.changed().await.is_err() {
            debug!("Timer state channel closed, ending event stream");
            return None;
        }

        let snapshot = *state_rx.borrow_and_update();
        match Event::default().event("state").json_data(snapshot) {
            Ok(event) => Some((Ok(event), (state_rx, false))),
            Err(e) => {
                warn!("Failed to encode timer state event: {}", e);
                None
            }
        }
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
