//! Docker Engine implementation of [`ContainerRuntime`].

use async_trait::async_trait;
use bollard::{
    container::{
        InspectContainerOptions, RestartContainerOptions, StartContainerOptions,
        StopContainerOptions,
    },
    Docker,
};

use super::ContainerRuntime;
use crate::{error::Result, tracing::prelude::*};

/// Container runtime backed by a Docker daemon.
///
/// Wraps one [`Docker`] client. The client multiplexes requests over its own
/// connection pool, so a single instance serves every request handler.
#[derive(Debug, Clone)]
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Connect using the standard environment (`DOCKER_HOST` and friends,
    /// else the platform's default socket) and negotiate the API version.
    ///
    /// Negotiation makes a round trip to the daemon, so an unreachable
    /// daemon is reported here rather than on the first request.
    pub async fn connect() -> Result<Self> {
        let docker = Docker::connect_with_defaults()?.negotiate_version().await?;
        debug!(api_version = ?docker.client_version(), "Connected to Docker daemon");
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn is_running(&self, name: &str) -> Result<bool> {
        let inspect = self
            .docker
            .inspect_container(name, None::<InspectContainerOptions>)
            .await?;

        Ok(inspect
            .state
            .and_then(|state| state.running)
            .unwrap_or(false))
    }

    async fn start(&self, name: &str) -> Result<()> {
        self.docker
            .start_container(name, None::<StartContainerOptions<String>>)
            .await?;
        Ok(())
    }

    async fn stop(&self, name: &str) -> Result<()> {
        self.docker
            .stop_container(name, None::<StopContainerOptions>)
            .await?;
        Ok(())
    }

    async fn restart(&self, name: &str) -> Result<()> {
        self.docker
            .restart_container(name, None::<RestartContainerOptions>)
            .await?;
        Ok(())
    }
}
