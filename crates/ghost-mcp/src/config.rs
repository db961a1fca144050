//! Server configuration.
//!
//! Values are resolved from three sources, later ones winning:
//!
//! 1. A TOML file: `--config <path>`, or `~/.config/ghost-mcp/config.toml`
//!    when it exists.
//! 2. Environment variables (`GHOST_API_URL`, `GHOST_ADMIN_API_KEY`,
//!    `GHOST_ACCEPT_VERSION`, `GHOST_TIMEOUT_SECONDS`).
//! 3. Command line flags.
//!
//! Sources 2 and 3 are merged by `clap` into [`ConfigOverrides`].
//!
//! ## Example Configuration
//!
//! ```toml
//! [ghost]
//! url = "https://blog.example.com"
//! admin_api_key = "6489fa7b2a4e3c0001d0e1a2:a1b2c3d4..."
//! accept_version = "v5.0"
//! timeout_seconds = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ghost_client::{DEFAULT_ACCEPT_VERSION, GhostClient, GhostClientConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::{McpServerError, Result};

/// Configuration file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub ghost: GhostSection,
}

/// `[ghost]` table of the configuration file.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GhostSection {
    pub url: Option<String>,
    pub admin_api_key: Option<String>,
    pub accept_version: Option<String>,
    pub timeout_seconds: Option<u64>,
}

// Custom Debug implementation to avoid exposing the admin key
impl std::fmt::Debug for GhostSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhostSection")
            .field("url", &self.url)
            .field("admin_api_key", &self.admin_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("accept_version", &self.accept_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl FileConfig {
    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            McpServerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Loads the explicit file if given, else the default file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested file is missing or any
    /// file that is read fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(McpServerError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::from_path(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Returns `~/.config/ghost-mcp/config.toml` (platform equivalent).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghost-mcp").join("config.toml"))
}

/// Values supplied on the command line or through the environment.
#[derive(Clone, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Path to a TOML configuration file
    #[arg(long, env = "GHOST_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ghost site URL, e.g. https://blog.example.com
    #[arg(long, env = "GHOST_API_URL")]
    pub url: Option<String>,

    /// Admin API key in `{id}:{secret}` form
    #[arg(long, env = "GHOST_ADMIN_API_KEY", hide_env_values = true)]
    pub admin_api_key: Option<String>,

    /// Value of the Accept-Version header
    #[arg(long, env = "GHOST_ACCEPT_VERSION")]
    pub accept_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "GHOST_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("config", &self.config)
            .field("url", &self.url)
            .field("admin_api_key", &self.admin_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("accept_version", &self.accept_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Fully resolved server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    pub url: String,
    pub admin_api_key: SecretString,
    pub accept_version: String,
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url)
            .field("admin_api_key", &"[REDACTED]")
            .field("accept_version", &self.accept_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ServerConfig {
    /// Loads the configuration file and applies overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or a required value is
    /// missing.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = FileConfig::load(overrides.config.as_deref())?;
        Self::resolve(file, overrides)
    }

    /// Merges file values with overrides and checks required values.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or admin key is missing, or the timeout is
    /// zero.
    pub fn resolve(file: FileConfig, overrides: &ConfigOverrides) -> Result<Self> {
        let ghost = file.ghost;

        let url = non_empty(overrides.url.clone().or(ghost.url)).ok_or_else(|| {
            McpServerError::Config(
                "Ghost URL is required (--url, GHOST_API_URL or [ghost].url)".to_string(),
            )
        })?;

        let admin_api_key = non_empty(overrides.admin_api_key.clone().or(ghost.admin_api_key))
            .ok_or_else(|| {
                McpServerError::Config(
                    "Ghost admin API key is required \
                     (--admin-api-key, GHOST_ADMIN_API_KEY or [ghost].admin_api_key)"
                        .to_string(),
                )
            })?;

        let accept_version = non_empty(overrides.accept_version.clone().or(ghost.accept_version))
            .unwrap_or_else(|| DEFAULT_ACCEPT_VERSION.to_string());

        let timeout_seconds = overrides.timeout_seconds.or(ghost.timeout_seconds);
        if timeout_seconds == Some(0) {
            return Err(McpServerError::Config(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            url,
            admin_api_key: SecretString::from(admin_api_key),
            accept_version,
            timeout_seconds,
        })
    }

    /// Builds the client configuration for [`ghost_client::GhostClient`].
    #[must_use]
    pub fn client_config(&self) -> GhostClientConfig {
        let config = GhostClientConfig::new(&self.url, self.admin_api_key.expose_secret())
            .with_accept_version(&self.accept_version);
        match self.timeout_seconds {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Builds the shared Ghost client.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError::Client`] if the URL or admin key is rejected.
    pub fn build_client(&self) -> Result<GhostClient> {
        Ok(GhostClient::new(&self.client_config())?)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
