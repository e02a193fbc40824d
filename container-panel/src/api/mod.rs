//! HTTP server.
//!
//! Serves the control panel with Axum: one HTML page, a status fragment the
//! page polls, and three POST endpoints that forward to the container
//! runtime. Every route sits behind the optional basic-auth gate.

use std::{net::SocketAddr, sync::Arc};

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::{config::Config, control::ContainerControl, error::Result, tracing::prelude::*};

pub mod auth;
mod panel;
pub mod templates;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub control: ContainerControl,
}

impl AppState {
    pub fn new(config: Arc<Config>, control: ContainerControl) -> Self {
        Self { config, control }
    }
}

/// Build the complete router, auth gate and request tracing included.
pub fn router(state: AppState) -> Router {
    panel::routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured port and serve until `shutdown` is cancelled.
///
/// A bind failure is returned to the caller; the daemon treats it as fatal.
pub async fn serve(state: AppState, shutdown: CancellationToken) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "System online");
    info!(container = %state.control.container(), "Target container");
    if !state.config.auth_enabled() {
        warn!("Basic authentication disabled, set AUTH_USER and AUTH_PASS to enable it");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    debug!("HTTP server stopped");
    Ok(())
}
