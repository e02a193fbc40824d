//! Container runtime abstraction.
//!
//! The panel needs four things from a daemon: ask whether a container is
//! running, and start, stop or restart it. [`ContainerRuntime`] captures
//! exactly that so the HTTP layer can be exercised against a fake.

use crate::error::Result;
use async_trait::async_trait;

pub mod docker;

#[cfg(test)]
pub(crate) mod fake;

pub use docker::DockerRuntime;

/// Control operations offered by a container runtime daemon.
///
/// Implementations must be shareable across concurrently handled requests.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Whether the daemon reports the container as running.
    async fn is_running(&self, name: &str) -> Result<bool>;

    /// Start the container.
    async fn start(&self, name: &str) -> Result<()>;

    /// Stop the container, using the daemon's default grace period.
    async fn stop(&self, name: &str) -> Result<()>;

    /// Restart the container, using the daemon's default grace period.
    async fn restart(&self, name: &str) -> Result<()>;
}
