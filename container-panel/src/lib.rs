//! Web control panel for a single container.
//!
//! The panel serves one page that polls the run state of a configured
//! container and offers start, stop and restart buttons. Every action is
//! forwarded to the container runtime daemon; nothing is cached locally.

pub mod api;
pub mod config;
pub mod control;
pub mod error;
pub mod runtime;
pub mod tracing;
