//! Countdown FAB - A single-screen countdown timer
//!
//! Wires the timer controller, the terminal renderer and the HTTP server
//! together and runs them until a shutdown signal arrives.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_fab::{
    api::create_router,
    config::Config,
    state::{AppState, INITIAL_TICKS, TICK_INTERVAL},
    timer::TimerController,
    utils::shutdown_signal,
    view::{render_task, DisplayMetrics},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_fab={},tower_http=info", config.log_level()))
        .init();

    info!("Starting countdown-fab v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, ticks={}, interval={}ms",
        config.host,
        config.port,
        INITIAL_TICKS,
        TICK_INTERVAL.as_millis()
    );

    let metrics = DisplayMetrics::detect(config.fallback_metrics());
    let controller = Arc::new(TimerController::new());

    if config.render {
        tokio::spawn(render_task(controller.subscribe(), metrics));
    }

    let state = Arc::new(AppState::new(
        Arc::clone(&controller),
        metrics,
        config.port,
        config.host.clone(),
    ));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle - Start the countdown, or reset it when running");
    info!("  GET  /status - Current timer state and screen model");
    info!("  GET  /events - Server-sent stream of timer states");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    controller.shutdown();
    info!("Server shutdown complete");
    Ok(())
}
