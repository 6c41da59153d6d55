use std::sync::Arc;

use tokio::signal;

use mergington::errors::Report;
use mergington::log;

mod config;
mod error;
mod handlers;
mod routes;
mod seed;
mod services;

use config::Config;
use services::ActivityServiceInMemory;

/// Shared state handed to every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Fresh state with the seeded activity directory.
    pub fn new() -> Self {
        Self {
            activities: ActivityServiceInMemory::seeded(),
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = Config::from_env()?;

    // Setup the state and routes
    let state = Arc::new(AppState::new());
    log::info!(
        "Seeded {} activities with {} enrollments",
        state.activities.activity_count(),
        state.activities.enrollment_count()
    );
    let app = routes::setup_routes(state, &config.static_dir);

    // Setup the server
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Serving static files from {}", config.static_dir.display());
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
