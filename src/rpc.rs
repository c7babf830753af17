//! JSON-RPC 2.0 framing types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// One incoming frame. A missing (or null) `id` marks a notification,
/// which gets no response.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl Request {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// One outgoing frame: exactly one of `result` or `error` is set.
#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

impl Response {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(ErrorObject {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Parameters of a `tools/call` request.
#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_notification_has_no_id() {
        let request: Request =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
                .unwrap();
        assert!(request.is_notification());
    }

    #[test]
    fn test_request_with_id() {
        let request: Request = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "ping"
        }))
        .unwrap();
        assert!(!request.is_notification());
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn test_result_response_omits_error_key() {
        let response = Response::result(json!(1), json!({}));
        let frame = serde_json::to_value(&response).unwrap();
        assert_eq!(frame["jsonrpc"], "2.0");
        assert!(frame.get("error").is_none());
        assert_eq!(frame["result"], json!({}));
    }

    #[test]
    fn test_error_response_carries_code() {
        let response = Response::error(json!(2), METHOD_NOT_FOUND, "method not found: nope");
        let frame = serde_json::to_value(&response).unwrap();
        assert!(frame.get("result").is_none());
        assert_eq!(frame["error"]["code"], -32601);
    }
}
