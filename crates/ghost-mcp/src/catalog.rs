//! Static tool catalog.
//!
//! The tool set is fixed at build time. The catalog is built once, on first
//! use, and is read-only for the rest of the process. It serves two purposes:
//! the `list_tools` self-description payload and the MCP input schemas, which
//! are derived from the same parameter definitions.

use std::sync::LazyLock;

use ghost_client::GhostMethod;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Name reported in `list_tools` and the MCP handshake.
pub const SERVER_NAME: &str = "ghost-mcp";

/// Version reported in `list_tools` and the MCP handshake.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    ListTools,
    Get,
    Post,
    Put,
    Delete,
}

impl ToolKind {
    pub const ALL: [Self; 5] = [Self::ListTools, Self::Get, Self::Post, Self::Put, Self::Delete];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListTools => "list_tools",
            Self::Get => "ghost_get",
            Self::Post => "ghost_post",
            Self::Put => "ghost_put",
            Self::Delete => "ghost_delete",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The HTTP verb behind a Ghost tool; `None` for `list_tools`.
    #[must_use]
    pub const fn method(self) -> Option<GhostMethod> {
        match self {
            Self::ListTools => None,
            Self::Get => Some(GhostMethod::Get),
            Self::Post => Some(GhostMethod::Post),
            Self::Put => Some(GhostMethod::Put),
            Self::Delete => Some(GhostMethod::Delete),
        }
    }
}

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolExample {
    pub description: &'static str,
    pub parameters: Value,
    /// Illustrative response text.
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format: &'static str,
    pub description: &'static str,
    pub schema: Value,
}

/// Self-description of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParamInfo>,
    pub examples: Vec<ToolExample>,
    pub response_format: ResponseFormat,
}

impl ToolInfo {
    /// JSON schema of the tool's arguments, as advertised over MCP.
    #[must_use]
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in &self.parameters {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
        }

        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }
}

/// The immutable set of tools.
#[derive(Debug)]
pub struct ToolCatalog {
    tools: Vec<ToolInfo>,
}

static CATALOG: LazyLock<ToolCatalog> = LazyLock::new(ToolCatalog::build);

impl ToolCatalog {
    /// The process-wide catalog.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    #[must_use]
    pub fn tools(&self) -> &[ToolInfo] {
        &self.tools
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolInfo> {
        self.tools.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    fn build() -> Self {
        Self {
            tools: ToolKind::ALL.into_iter().map(tool_info).collect(),
        }
    }
}

fn tool_info(kind: ToolKind) -> ToolInfo {
    match kind {
        ToolKind::ListTools => list_tools_info(),
        ToolKind::Get => ToolInfo {
            name: kind.name(),
            description: "Makes a GET request to the Ghost Admin API with automatic authentication",
            parameters: vec![endpoint_param(
                r#"The Ghost API endpoint path (e.g., "posts", "posts/123", "tags")"#,
            )],
            examples: vec![
                ToolExample {
                    description: "Get all posts",
                    parameters: json!({"endpoint": "posts"}),
                    response: r#"{ "success": true, "data": { "posts": [...], "meta": {...} } }"#
                        .to_string(),
                },
                ToolExample {
                    description: "Get a specific post by ID",
                    parameters: json!({"endpoint": "posts/5f9c4d732be87a0001c2a123"}),
                    response: r#"{ "success": true, "data": { "posts": [...] } }"#.to_string(),
                },
            ],
            response_format: envelope_format("Returns data from the Ghost API with success status"),
        },
        ToolKind::Post => ToolInfo {
            name: kind.name(),
            description: "Makes a POST request to the Ghost Admin API with automatic authentication",
            parameters: vec![
                endpoint_param(r#"The Ghost API endpoint path (e.g., "posts", "tags")"#),
                data_param("The data to send in the POST request"),
            ],
            examples: vec![ToolExample {
                description: "Create a new post",
                parameters: json!({
                    "endpoint": "posts",
                    "data": {"posts": [{"title": "New Post", "status": "draft"}]}
                }),
                response: r#"{ "success": true, "data": { "posts": [...], "meta": {...} } }"#
                    .to_string(),
            }],
            response_format: envelope_format("Returns data from the Ghost API with success status"),
        },
        ToolKind::Put => ToolInfo {
            name: kind.name(),
            description: "Makes a PUT request to the Ghost Admin API with automatic authentication",
            parameters: vec![
                endpoint_param(r#"The Ghost API endpoint path (e.g., "posts/123", "tags/456")"#),
                data_param("The data to send in the PUT request"),
            ],
            examples: vec![ToolExample {
                description: "Update an existing post",
                parameters: json!({
                    "endpoint": "posts/5f9c4d732be87a0001c2a123",
                    "data": {"posts": [{"title": "Updated Post Title", "status": "published"}]}
                }),
                response: r#"{ "success": true, "data": { "posts": [...], "meta": {...} } }"#
                    .to_string(),
            }],
            response_format: envelope_format("Returns data from the Ghost API with success status"),
        },
        ToolKind::Delete => ToolInfo {
            name: kind.name(),
            description: "Makes a DELETE request to the Ghost Admin API with automatic authentication",
            parameters: vec![endpoint_param(
                r#"The Ghost API endpoint path (e.g., "posts/123", "tags/456")"#,
            )],
            examples: vec![ToolExample {
                description: "Delete a post",
                parameters: json!({"endpoint": "posts/5f9c4d732be87a0001c2a123"}),
                response: r#"{ "success": true, "data": null }"#.to_string(),
            }],
            response_format: envelope_format("Returns success status from the Ghost API"),
        },
    }
}

fn list_tools_info() -> ToolInfo {
    let example = json!({
        "tools": [{
            "name": "list_tools",
            "description": "Returns a JSON list of all available tools...",
        }],
        "count": 1,
        "server": {"name": SERVER_NAME, "version": SERVER_VERSION},
    });

    ToolInfo {
        name: ToolKind::ListTools.name(),
        description: "Returns a JSON list of all available tools with their descriptions, parameters, and examples",
        parameters: Vec::new(),
        examples: vec![ToolExample {
            description: "List all available tools",
            parameters: json!({}),
            response: serde_json::to_string_pretty(&example).unwrap_or_default(),
        }],
        response_format: ResponseFormat {
            format: "json",
            description: "Returns information about all available tools",
            schema: json!({
                "type": "object",
                "properties": {
                    "tools": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "description": {"type": "string"},
                                "parameters": {"type": "array"},
                                "examples": {"type": "array"},
                                "responseFormat": {"type": "object"}
                            }
                        }
                    },
                    "count": {"type": "number"},
                    "server": {
                        "type": "object",
                        "properties": {
                            "name": {"type": "string"},
                            "version": {"type": "string"}
                        }
                    }
                }
            }),
        },
    }
}

const fn endpoint_param(description: &'static str) -> ParamInfo {
    ParamInfo {
        name: "endpoint",
        param_type: ParamType::String,
        description,
        required: true,
    }
}

const fn data_param(description: &'static str) -> ParamInfo {
    ParamInfo {
        name: "data",
        param_type: ParamType::Object,
        description,
        required: true,
    }
}

fn envelope_format(description: &'static str) -> ResponseFormat {
    ResponseFormat {
        format: "json",
        description,
        schema: json!({
            "type": "object",
            "properties": {
                "success": {"type": "boolean"},
                "data": {"type": "object"},
                "error": {"type": "string"},
                "details": {"type": "string"}
            }
        }),
    }
}
