//! JSON-RPC 2.0 protocol types for MCP

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

#[derive(Serialize)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<serde_json::Value>, code: i32, message: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(Error {
                code,
                message: message.to_string(),
            }),
        }
    }

    /// Tool result carrying one text content block
    pub fn tool_text(id: Option<serde_json::Value>, text: &str) -> Self {
        Self::success(
            id,
            serde_json::json!({
                "content": [{ "type": "text", "text": text }]
            }),
        )
    }

    /// Tool result flagged as an error. Tool-level failures stay inside the
    /// result; JSON-RPC errors are reserved for protocol problems.
    pub fn tool_error(id: Option<serde_json::Value>, text: &str) -> Self {
        Self::success(
            id,
            serde_json::json!({
                "content": [{ "type": "text", "text": text }],
                "isError": true
            }),
        )
    }
}
