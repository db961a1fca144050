//! Tool handlers.
//!
//! Each Ghost tool parses its arguments, runs one request through the shared
//! [`GhostClient`] and wraps the outcome in a [`ToolEnvelope`]. Nothing here
//! returns an error: bad arguments and failed requests both become failure
//! envelopes so the caller always receives parseable JSON.

use ghost_client::{GhostClient, GhostMethod, GhostRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::catalog::{ToolCatalog, ToolKind};
use crate::envelope::{ListToolsResponse, ToolEnvelope};

/// Rendered result of one tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    fn from_envelope(envelope: &ToolEnvelope) -> Self {
        Self {
            text: envelope.to_text(),
            is_error: !envelope.is_success(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EndpointArgs {
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct PayloadArgs {
    endpoint: String,
    data: Value,
}

/// Executes the five tools against one shared client.
#[derive(Debug, Clone)]
pub struct GhostTools {
    client: GhostClient,
    catalog: &'static ToolCatalog,
}

impl GhostTools {
    #[must_use]
    pub fn new(client: GhostClient) -> Self {
        Self {
            client,
            catalog: ToolCatalog::global(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static ToolCatalog {
        self.catalog
    }

    /// Runs a tool with the raw argument object from the caller.
    pub async fn execute(&self, kind: ToolKind, arguments: &Map<String, Value>) -> ToolOutput {
        match kind.method() {
            None => self.list_tools(),
            Some(method) => self.execute_request(method, arguments).await,
        }
    }

    /// `list_tools`: the static catalog.
    #[must_use]
    pub fn list_tools(&self) -> ToolOutput {
        ToolOutput {
            text: ListToolsResponse::new(self.catalog.tools()).to_text(),
            is_error: false,
        }
    }

    /// `ghost_get{endpoint}`.
    pub async fn ghost_get(&self, endpoint: &str) -> ToolOutput {
        self.run(GhostRequest::get(endpoint)).await
    }

    /// `ghost_post{endpoint, data}`.
    pub async fn ghost_post(&self, endpoint: &str, data: Value) -> ToolOutput {
        self.run(GhostRequest::post(endpoint, data)).await
    }

    /// `ghost_put{endpoint, data}`.
    pub async fn ghost_put(&self, endpoint: &str, data: Value) -> ToolOutput {
        self.run(GhostRequest::put(endpoint, data)).await
    }

    /// `ghost_delete{endpoint}`.
    pub async fn ghost_delete(&self, endpoint: &str) -> ToolOutput {
        self.run(GhostRequest::delete(endpoint)).await
    }

    async fn execute_request(&self, method: GhostMethod, arguments: &Map<String, Value>) -> ToolOutput {
        let request = if method.carries_body() {
            parse_args::<PayloadArgs>(arguments)
                .map(|args| GhostRequest::new(args.endpoint, method, Some(args.data)))
        } else {
            parse_args::<EndpointArgs>(arguments)
                .map(|args| GhostRequest::new(args.endpoint, method, None))
        };

        match request {
            Ok(request) => self.run(request).await,
            Err(details) => {
                warn!(%method, "Rejected tool arguments: {details}");
                ToolOutput::from_envelope(&ToolEnvelope::failure(failure_message(method), details))
            }
        }
    }

    async fn run(&self, request: GhostRequest) -> ToolOutput {
        debug!(method = %request.method, endpoint = %request.endpoint, "Executing Ghost request");

        let envelope = match self.client.make_request(&request).await {
            Ok(data) => ToolEnvelope::success(data),
            Err(e) => {
                warn!(
                    method = %request.method,
                    endpoint = %request.endpoint,
                    status = e.status().map(|s| s.as_u16()),
                    "Ghost request failed: {e}"
                );
                ToolEnvelope::failure(failure_message(request.method), e.to_string())
            }
        };

        ToolOutput::from_envelope(&envelope)
    }
}

fn failure_message(method: GhostMethod) -> String {
    format!("Failed to execute Ghost {method} request")
}

fn parse_args<T: DeserializeOwned>(arguments: &Map<String, Value>) -> Result<T, String> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| format!("Invalid arguments: {e}"))
}
