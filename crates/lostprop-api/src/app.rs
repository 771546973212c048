//! Application builder: wires router, middleware and state into an Axum app.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use lostprop_core::config::{AppConfig, CorsConfig};
use lostprop_core::error::AppError;
use lostprop_database::Stores;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Runs the portal server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, stores: Stores) -> Result<(), AppError> {
    tracing::info!(backend = stores.backend_name(), "Starting lost-property portal server...");

    // ── Step 1: Wire services and real-time hub ──────────────────
    let state = AppState::build(config.clone(), stores.clone())?;

    // ── Step 2: Build and bind the HTTP server ───────────────────
    let app = build_app(state, &config.server.cors);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Portal server listening on {}", addr);

    // ── Step 3: Serve until shutdown, then drain for the grace period ─
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    let mut server = std::pin::pin!(server);

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = shutdown_rx.wait_for(|stop| *stop) => {
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => {
                    result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
                }
                Err(_) => tracing::warn!(
                    grace_seconds = grace.as_secs(),
                    "Grace period elapsed with connections still open"
                ),
            }
        }
    }

    stores.close().await;
    tracing::info!("Portal server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
