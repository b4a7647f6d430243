//! JSON-RPC 2.0 envelopes and the MCP result shapes the servers return.
//!
//! Only the slice of MCP the tool servers speak is modelled: lifecycle
//! (`initialize`, `ping`) plus `tools/list` and `tools/call`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

/// An incoming request or notification. The `jsonrpc` marker is not checked.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Request {
    /// Notifications carry no id and never get a reply.
    pub fn is_notification(&self) -> bool {
        self.id.is_none() || self.method.starts_with("notifications/")
    }

    fn reply_id(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    jsonrpc: &'static str,
    id: Value,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Result(Value),
    Error(RpcError),
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i32,
    message: String,
}

impl Response {
    /// Reply to `req` with `result`, or an internal error if it cannot be
    /// serialized.
    pub fn result(req: &Request, result: &impl Serialize) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::build(req.reply_id(), Outcome::Result(value)),
            Err(e) => Self::error(req, INTERNAL_ERROR, format!("Serialization error: {e}")),
        }
    }

    pub fn error(req: &Request, code: i32, message: String) -> Self {
        Self::unaddressed_error(req.reply_id(), code, message)
    }

    /// Error for input that never became a request; `id` is null.
    pub fn parse_error(message: String) -> Self {
        Self::unaddressed_error(Value::Null, PARSE_ERROR, message)
    }

    fn unaddressed_error(id: Value, code: i32, message: String) -> Self {
        Self::build(id, Outcome::Error(RpcError { code, message }))
    }

    fn build(id: Value, outcome: Outcome) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            outcome,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

/// Result of `initialize`: protocol version, a static tools capability and
/// the server's identity.
pub fn initialize_result(info: &ServerInfo) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": info,
    })
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Result of `tools/call`: a single text block, flagged when it reports a
/// failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<TextContent>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

#[derive(Debug, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    kind: &'static str,
    pub text: String,
}

impl ToolCallResult {
    fn single(text: String, is_error: bool) -> Self {
        Self {
            content: vec![TextContent { kind: "text", text }],
            is_error,
        }
    }

    pub fn text(text: String) -> Self {
        Self::single(text, false)
    }

    pub fn error(message: String) -> Self {
        Self::single(message, true)
    }

    /// Pretty-printed JSON, flagged as an error when `is_error` is set.
    pub fn json(value: &impl Serialize, is_error: bool) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::single(text, is_error),
            Err(e) => Self::error(format!("Serialization error: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(raw: &str) -> Request {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_notification_detection() {
        assert!(request(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).is_notification());
        assert!(request(r#"{"jsonrpc":"2.0","method":"ping"}"#).is_notification());
        assert!(!request(r#"{"jsonrpc":"2.0","id":0,"method":"ping"}"#).is_notification());
    }

    #[test]
    fn test_response_shapes() {
        let req = request(r#"{"jsonrpc":"2.0","id":3,"method":"x"}"#);

        let ok = serde_json::to_value(Response::result(&req, &json!({"a": 1}))).unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "id": 3, "result": {"a": 1}}));

        let err = serde_json::to_value(Response::error(&req, METHOD_NOT_FOUND, "nope".into())).unwrap();
        assert_eq!(
            err,
            json!({"jsonrpc": "2.0", "id": 3, "error": {"code": -32601, "message": "nope"}})
        );
    }

    #[test]
    fn test_tool_result_serialization() {
        let ok = serde_json::to_value(ToolCallResult::text("hi".into())).unwrap();
        assert_eq!(ok, json!({"content": [{"type": "text", "text": "hi"}]}));

        let failed = serde_json::to_value(ToolCallResult::json(&json!({"success": false}), true)).unwrap();
        assert_eq!(failed["isError"], true);
    }
}
