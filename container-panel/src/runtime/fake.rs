//! In-memory [`ContainerRuntime`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::ContainerRuntime;
use crate::error::{Error, Result};

/// A daemon call as seen by [`FakeRuntime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Inspect(String),
    Start(String),
    Stop(String),
    Restart(String),
}

/// Scripted runtime that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct FakeRuntime {
    running: Mutex<bool>,
    inspect_error: Option<String>,
    command_error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRuntime {
    pub(crate) fn running() -> Self {
        let fake = Self::default();
        fake.set_running(true);
        fake
    }

    pub(crate) fn stopped() -> Self {
        Self::default()
    }

    /// Inspection fails, as when the container is missing.
    pub(crate) fn unreachable() -> Self {
        Self {
            inspect_error: Some("No such container: mc-server".into()),
            ..Self::default()
        }
    }

    /// Start, stop and restart fail with `message`.
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            command_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub(crate) fn set_running(&self, running: bool) {
        *self.running.lock().unwrap() = running;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.command_error {
            Some(message) => Err(Error::Runtime(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn is_running(&self, name: &str) -> Result<bool> {
        self.calls.lock().unwrap().push(Call::Inspect(name.into()));
        match &self.inspect_error {
            Some(message) => Err(Error::Runtime(message.clone())),
            None => Ok(*self.running.lock().unwrap()),
        }
    }

    async fn start(&self, name: &str) -> Result<()> {
        self.record(Call::Start(name.into()))?;
        self.set_running(true);
        Ok(())
    }

    async fn stop(&self, name: &str) -> Result<()> {
        self.record(Call::Stop(name.into()))?;
        self.set_running(false);
        Ok(())
    }

    async fn restart(&self, name: &str) -> Result<()> {
        self.record(Call::Restart(name.into()))?;
        self.set_running(true);
        Ok(())
    }
}
