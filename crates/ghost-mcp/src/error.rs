//! Error types for the ghost-mcp server.

use ghost_client::GhostError;
use thiserror::Error;

/// Errors that can occur while starting or running the server.
///
/// Tool invocations never produce these; their failures are rendered as
/// response envelopes instead.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Missing or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Ghost client rejected its configuration.
    #[error("Ghost client error: {0}")]
    Client(#[from] GhostError),

    /// MCP service failed to start or stopped abnormally.
    #[error("MCP service error: {0}")]
    Service(String),
}

/// Result type alias using `McpServerError`.
pub type Result<T> = std::result::Result<T, McpServerError>;
