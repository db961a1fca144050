//! Response envelopes rendered as the text payload of every tool result.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use serde_json::Value;

use crate::catalog::{SERVER_NAME, SERVER_VERSION, ToolInfo};

/// `{success: true, data}` or `{success: false, error, details}`.
///
/// The `success` flag is written from the variant, so it cannot disagree
/// with the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEnvelope {
    Success { data: Value },
    Failure { error: String, details: String },
}

impl Serialize for ToolEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data } => {
                let mut state = serializer.serialize_struct("ToolEnvelope", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Failure { error, details } => {
                let mut state = serializer.serialize_struct("ToolEnvelope", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("details", details)?;
                state.end()
            }
        }
    }
}

impl ToolEnvelope {
    #[must_use]
    pub const fn success(data: Value) -> Self {
        Self::Success { data }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            details: details.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Pretty-printed JSON text.
    #[must_use]
    pub fn to_text(&self) -> String {
        render(self)
    }
}

/// Identity block of the `list_tools` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerIdentity {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: SERVER_NAME,
            version: SERVER_VERSION,
        }
    }
}

/// Payload of the `list_tools` tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListToolsResponse<'a> {
    pub tools: &'a [ToolInfo],
    pub count: usize,
    pub server: ServerIdentity,
}

impl<'a> ListToolsResponse<'a> {
    #[must_use]
    pub fn new(tools: &'a [ToolInfo]) -> Self {
        Self {
            tools,
            count: tools.len(),
            server: ServerIdentity::default(),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        render(self)
    }
}

fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize tool response: {e}");
        let fallback = ToolEnvelope::failure("Failed to serialize response", e.to_string());
        serde_json::to_string(&fallback).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let envelope = ToolEnvelope::success(json!({"posts": []}));
        let value: Value = serde_json::from_str(&envelope.to_text()).unwrap();

        assert_eq!(value, json!({"success": true, "data": {"posts": []}}));
        assert!(envelope.is_success());
    }

    #[test]
    fn test_null_data_is_kept() {
        let value: Value =
            serde_json::from_str(&ToolEnvelope::success(Value::Null).to_text()).unwrap();
        assert_eq!(value, json!({"success": true, "data": null}));
    }

    #[test]
    fn test_failure_shape() {
        let envelope = ToolEnvelope::failure("Failed to execute Ghost GET request", "boom");
        let value: Value = serde_json::from_str(&envelope.to_text()).unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "Failed to execute Ghost GET request",
                "details": "boom"
            })
        );
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_success_flag_follows_variant() {
        let success = serde_json::to_value(ToolEnvelope::Success { data: json!(1) }).unwrap();
        assert_eq!(success["success"], true);

        let failure = serde_json::to_value(ToolEnvelope::Failure {
            error: "e".to_string(),
            details: "d".to_string(),
        })
        .unwrap();
        assert_eq!(failure["success"], false);
        assert!(failure.get("data").is_none());
    }

    #[test]
    fn test_text_is_pretty_printed() {
        let text = ToolEnvelope::success(json!({"a": 1})).to_text();
        assert!(text.contains("\n  \"success\": true"));
    }
}
