//! Error types for the Ghost Admin API client.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Maximum number of characters of a raw upstream body kept in an error.
const MAX_BODY_EXCERPT: usize = 512;

/// Error envelope returned by the Ghost Admin API.
///
/// Ghost reports failures as `{"errors": [{"message": "...", ...}]}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// One entry per reported problem.
    pub errors: Vec<ErrorDetail>,
}

/// A single entry of a Ghost error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// Human readable message.
    pub message: String,
    /// Ghost's error class, e.g. `NotFoundError`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Additional context, when Ghost provides it.
    #[serde(default)]
    pub context: Option<String>,
}

impl ErrorResponse {
    /// Joins all messages (and their context) into one line.
    #[must_use]
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| match &e.context {
                Some(context) if !context.is_empty() => format!("{} ({context})", e.message),
                _ => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Errors that can occur while talking to the Ghost Admin API.
///
/// Configuration problems are raised when a [`crate::GhostClient`] or
/// [`crate::TokenSigner`] is built; everything else is raised per request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GhostError {
    /// Malformed admin key, missing or invalid base URL.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The endpoint cannot be mapped below the Admin API prefix.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as supplied by the caller.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Token signing failed.
    #[error("Signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// Network, DNS, TLS or timeout failure. No status code is available.
    #[error("Failed to reach the Ghost Admin API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Admin API answered with a non-success status.
    #[error("Ghost API returned {status}: {message}")]
    Upstream {
        /// Upstream HTTP status.
        status: StatusCode,
        /// Messages from Ghost's error envelope, or a raw body excerpt.
        message: String,
        /// Decoded error body, if it was JSON.
        body: Option<serde_json::Value>,
    },

    /// A success status with a body that is not valid JSON.
    #[error("Failed to decode Ghost API response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl GhostError {
    /// Builds an [`GhostError::Upstream`] from a status and the raw response text.
    #[must_use]
    pub fn upstream(status: StatusCode, text: &str) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(text).ok();

        let message = match serde_json::from_str::<ErrorResponse>(text) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed.summary(),
            _ if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string(),
            _ => excerpt(text),
        };

        Self::Upstream {
            status,
            message,
            body,
        }
    }

    /// Upstream status code, if the Admin API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the upstream resource was not found (HTTP 404).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Check if the Admin API rejected the request itself (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Check if the Admin API failed on its side (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_BODY_EXCERPT {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
    cut.push_str("...");
    cut
}
