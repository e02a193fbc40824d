//! Control panel daemon.
//!
//! Loads configuration, connects to the Docker daemon and serves the panel
//! until SIGINT or SIGTERM. Any startup failure exits with status 1.

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use tokio::signal::unix::{self, SignalKind};
use tokio_util::sync::CancellationToken;

use container_panel::{
    api::{self, AppState},
    config::Config,
    control::ContainerControl,
    runtime::DockerRuntime,
    tracing::{self, prelude::*},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing::init_journald_or_stdout();

    match run().await {
        Ok(()) => {
            info!("Exiting.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::load().context("Invalid configuration")?;

    let runtime = DockerRuntime::connect()
        .await
        .context("Critical Docker connection error")?;
    let control = ContainerControl::new(Arc::new(runtime), config.container_name.clone());

    let shutdown = CancellationToken::new();
    let mut sigint = unix::signal(SignalKind::interrupt()).context("Installing SIGINT handler")?;
    let mut sigterm =
        unix::signal(SignalKind::terminate()).context("Installing SIGTERM handler")?;
    let signalled = shutdown.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => {},
            _ = sigterm.recv() => {},
        }
        trace!("Shutting down.");
        signalled.cancel();
    });

    let state = AppState::new(Arc::new(config), control);
    api::serve(state, shutdown)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
