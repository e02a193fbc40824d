//! Control façade for the configured container.
//!
//! [`ContainerControl`] binds a [`ContainerRuntime`] to one container name
//! and is the only thing the HTTP handlers talk to.

use std::{fmt, sync::Arc};

use crate::{error::Result, runtime::ContainerRuntime, tracing::prelude::*};

/// Commands an operator can issue from the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Restart,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Start => "START",
            Command::Stop => "STOP",
            Command::Restart => "RESTART",
        };
        f.write_str(name)
    }
}

/// Handle on the single container managed by this panel.
///
/// Cheap to clone; clones share the same runtime client.
#[derive(Clone)]
pub struct ContainerControl {
    runtime: Arc<dyn ContainerRuntime>,
    container: String,
}

impl ContainerControl {
    /// Create a façade for `container` on `runtime`.
    pub fn new(runtime: Arc<dyn ContainerRuntime>, container: impl Into<String>) -> Self {
        Self {
            runtime,
            container: container.into(),
        }
    }

    /// Name of the controlled container.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Whether the container is running.
    ///
    /// Any inspection failure (unknown container, daemon down) reads as
    /// "not running"; the panel has no third state to show.
    pub async fn is_running(&self) -> bool {
        match self.runtime.is_running(&self.container).await {
            Ok(running) => running,
            Err(e) => {
                debug!(
                    container = %self.container,
                    error = %e,
                    "Inspect failed, reporting container as stopped"
                );
                false
            }
        }
    }

    pub async fn start(&self) -> Result<()> {
        self.execute(Command::Start).await
    }

    pub async fn stop(&self) -> Result<()> {
        self.execute(Command::Stop).await
    }

    pub async fn restart(&self) -> Result<()> {
        self.execute(Command::Restart).await
    }

    /// Forward `command` to the daemon. Errors are logged and returned
    /// untouched; nothing is retried.
    pub async fn execute(&self, command: Command) -> Result<()> {
        info!(container = %self.container, "Command: {command}");

        let result = match command {
            Command::Start => self.runtime.start(&self.container).await,
            Command::Stop => self.runtime.stop(&self.container).await,
            Command::Restart => self.runtime.restart(&self.container).await,
        };

        if let Err(e) = &result {
            error!(
                container = %self.container,
                command = %command,
                error = %e,
                "Container command failed"
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::fake::{Call, FakeRuntime};
    use test_case::test_case;

    fn control(fake: &Arc<FakeRuntime>) -> ContainerControl {
        ContainerControl::new(fake.clone(), "mc-server")
    }

    #[tokio::test]
    async fn test_running_container_reported_running() {
        let fake = Arc::new(FakeRuntime::running());
        assert!(control(&fake).is_running().await);
        assert_eq!(fake.calls(), vec![Call::Inspect("mc-server".into())]);
    }

    #[tokio::test]
    async fn test_stopped_container_reported_stopped() {
        let fake = Arc::new(FakeRuntime::stopped());
        assert!(!control(&fake).is_running().await);
    }

    #[tokio::test]
    async fn test_inspect_error_reported_as_stopped() {
        let fake = Arc::new(FakeRuntime::unreachable());
        assert!(!control(&fake).is_running().await);
    }

    #[test_case(Command::Start, Call::Start("mc-server".into()) ; "start")]
    #[test_case(Command::Stop, Call::Stop("mc-server".into()) ; "stop")]
    #[test_case(Command::Restart, Call::Restart("mc-server".into()) ; "restart")]
    #[tokio::test]
    async fn test_command_issues_one_daemon_call(command: Command, expected: Call) {
        let fake = Arc::new(FakeRuntime::stopped());
        control(&fake).execute(command).await.unwrap();
        assert_eq!(fake.calls(), vec![expected]);
    }

    #[tokio::test]
    async fn test_command_error_propagates_daemon_message() {
        let fake = Arc::new(FakeRuntime::failing("container is paused"));
        let err = control(&fake).stop().await.unwrap_err();
        assert_eq!(err.to_string(), "container is paused");
    }

    #[tokio::test]
    async fn test_start_then_stop_round_trip() {
        let fake = Arc::new(FakeRuntime::stopped());
        let control = control(&fake);

        control.start().await.unwrap();
        assert!(control.is_running().await);
        control.stop().await.unwrap();
        assert!(!control.is_running().await);
        control.restart().await.unwrap();
        assert!(control.is_running().await);
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Start.to_string(), "START");
        assert_eq!(Command::Stop.to_string(), "STOP");
        assert_eq!(Command::Restart.to_string(), "RESTART");
    }
}
