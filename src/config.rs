//! Configuration for context-wrangler
//!
//! Connection settings for the Redis store, with sensible defaults.
//!
//! ## Sources
//! - `REDIS_HOST`     (default `localhost`)
//! - `REDIS_PORT`     (default `6379`)
//! - `REDIS_PASSWORD` (optional; empty means no password)
//!
//! The binary pre-populates the environment from a `.env` file via
//! [`load_env_file`] before calling [`Config::from_env`].

use std::path::{Path, PathBuf};

use crate::error::{Result, WranglerError};

/// Environment variable holding the store host
pub const HOST_VAR: &str = "REDIS_HOST";

/// Environment variable holding the store port
pub const PORT_VAR: &str = "REDIS_PORT";

/// Environment variable holding the store password
pub const PASSWORD_VAR: &str = "REDIS_PASSWORD";

/// Settings file looked up next to the executable
pub const ENV_FILE_NAME: &str = ".env";

/// Connection configuration for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Store host name or address
    pub host: String,

    /// Store TCP port
    pub port: u16,

    /// Password sent with AUTH, if any
    pub password: Option<String>,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// COUNT hint passed to each SCAN round trip
    pub scan_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            password: None,
            scan_count: 100,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup function
    ///
    /// Unset variables fall back to the defaults. A port that does not parse
    /// as a TCP port is a configuration error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder();

        if let Some(host) = lookup(HOST_VAR) {
            builder = builder.host(host);
        }

        if let Some(raw) = lookup(PORT_VAR) {
            let port = raw.trim().parse::<u16>().map_err(|e| {
                WranglerError::Config(format!("invalid {} value '{}': {}", PORT_VAR, raw, e))
            })?;
            builder = builder.port(port);
        }

        builder = builder.password(lookup(PASSWORD_VAR).filter(|p| !p.is_empty()));

        Ok(builder.build())
    }

    /// `host:port`, for logging
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the store port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set or clear the store password
    pub fn password(mut self, password: Option<String>) -> Self {
        self.config.password = password;
        self
    }

    /// Set the SCAN COUNT hint
    pub fn scan_count(mut self, count: usize) -> Self {
        self.config.scan_count = count.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

// =============================================================================
// Settings File
// =============================================================================

/// Load a `.env` settings file into the process environment
///
/// With an explicit path the file must exist. Without one, `.env` next to the
/// running executable is loaded if present and silently skipped otherwise.
/// Variables already set in the environment win over the file.
///
/// Returns the path that was loaded, if any.
pub fn load_env_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        dotenvy::from_path(path).map_err(|e| {
            WranglerError::Config(format!("cannot load {}: {}", path.display(), e))
        })?;
        return Ok(Some(path.to_path_buf()));
    }

    let Some(path) = default_env_file() else {
        return Ok(None);
    };

    match dotenvy::from_path(&path) {
        Ok(()) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(WranglerError::Config(format!(
            "cannot load {}: {}",
            path.display(),
            e
        ))),
    }
}

/// `.env` in the directory of the running executable
fn default_env_file() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?;
    Some(dir.join(ENV_FILE_NAME))
}
