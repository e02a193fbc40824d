//! Configuration for container-panel.
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file in the working directory. The record is built once at
//! startup and handed to the HTTP surface; nothing reads the environment
//! after that.

use crate::error::{Error, Result};
use std::env;

/// Default container name when `CONTAINER_NAME` is unset.
pub const DEFAULT_CONTAINER_NAME: &str = "mc-server";

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Default page title when `APP_TITLE` is unset.
pub const DEFAULT_TITLE: &str = "MINECRAFT SERVER";

/// Immutable panel configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name (or id) of the container under control
    pub container_name: String,

    /// TCP port to listen on, all interfaces
    pub port: u16,

    /// Title shown on the page and in the browser tab
    pub title: String,

    /// Basic-auth username; empty disables the gate
    pub auth_user: String,

    /// Basic-auth password; empty disables the gate
    pub auth_pass: String,
}

impl Config {
    /// Load `.env` (if present) and then read the process environment.
    ///
    /// Entries in `.env` never replace variables already set in the
    /// environment.
    pub fn load() -> Result<Self> {
        // A missing .env is the common case, not an error.
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Read the process environment without touching `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// A variable that is present but empty keeps its empty value; only an
    /// absent variable falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                Error::Config(format!("PORT must be a port number, got {raw:?}: {e}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            container_name: lookup("CONTAINER_NAME")
                .unwrap_or_else(|| DEFAULT_CONTAINER_NAME.to_string()),
            port,
            title: lookup("APP_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            auth_user: lookup("AUTH_USER").unwrap_or_default(),
            auth_pass: lookup("AUTH_PASS").unwrap_or_default(),
        })
    }

    /// Whether requests must carry basic-auth credentials.
    ///
    /// Both the username and the password have to be non-empty; if only one
    /// of them is set the panel is left open.
    pub fn auth_enabled(&self) -> bool {
        !self.auth_user.is_empty() && !self.auth_pass.is_empty()
    }
}
