//! Blocking stdio server loop.
//!
//! stdout carries protocol frames only; every log line goes to stderr.
//! Requests are handled one at a time in arrival order, and each tool
//! call runs to completion before the next frame is read.

use std::io::{self, BufRead, Write};

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::ToolError;
use crate::rpc::{self, CallToolParams, Request, Response};
use crate::tools::{self, Tool};

/// Protocol revision assumed when the client does not name one.
const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Serves requests from stdin until EOF.
///
/// Malformed frames and notifications are logged and skipped; nothing a
/// client sends can make the loop exit early or panic.
pub fn run() -> io::Result<()> {
    let tools = tools::registry();
    info!("serving {} tools on stdio", tools.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request: Request = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(err) => {
                warn!("discarding unparseable frame: {err}");
                continue;
            }
        };
        if request.is_notification() {
            debug!("ignoring notification: {}", request.method);
            continue;
        }
        let response = dispatch(&tools, request);
        write_response(&mut out, &response)?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

fn dispatch(tools: &[Box<dyn Tool>], request: Request) -> Response {
    let id = request.id.unwrap_or(Value::Null);
    if request.jsonrpc != rpc::JSONRPC_VERSION {
        return Response::error(
            id,
            rpc::INVALID_REQUEST,
            format!("unsupported jsonrpc version: {:?}", request.jsonrpc),
        );
    }

    debug!("handling {}", request.method);
    match request.method.as_str() {
        "initialize" => Response::result(id, initialize_result(&request.params)),
        "ping" => Response::result(id, json!({})),
        "tools/list" => Response::result(id, list_tools(tools)),
        "tools/call" => call_tool(tools, id, request.params),
        // Hosts probe these even when a server never announces them.
        "resources/list" => Response::result(id, json!({ "resources": [] })),
        "prompts/list" => Response::result(id, json!({ "prompts": [] })),
        other => Response::error(
            id,
            rpc::METHOD_NOT_FOUND,
            format!("method not found: {other}"),
        ),
    }
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);
    json!({
        "protocolVersion": protocol_version,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }
    })
}

fn list_tools(tools: &[Box<dyn Tool>]) -> Value {
    let descriptors: Vec<Value> = tools
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name(),
                "description": tool.description(),
                "inputSchema": tool.input_schema(),
            })
        })
        .collect();
    json!({ "tools": descriptors })
}

fn call_tool(tools: &[Box<dyn Tool>], id: Value, params: Value) -> Response {
    let params: CallToolParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(err) => {
            return Response::error(id, rpc::INVALID_PARAMS, format!("invalid params: {err}"));
        }
    };

    info!("tool call: {}", params.name);
    let arguments = params.arguments.unwrap_or_else(|| json!({}));
    let outcome = match tools.iter().find(|tool| tool.name() == params.name) {
        Some(tool) => tool.call(arguments),
        None => Err(ToolError::InvalidInput(format!(
            "unknown tool: {}",
            params.name
        ))),
    };

    match outcome {
        Ok(text) => Response::result(id, tool_content(text, false)),
        Err(err) => {
            warn!("tool {} failed: {err}", params.name);
            Response::result(id, tool_content(err.to_string(), true))
        }
    }
}

/// Tool results are text content either way; `isError` tells the caller
/// which. Protocol errors stay reserved for malformed requests.
fn tool_content(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

fn write_response(out: &mut impl Write, response: &Response) -> io::Result<()> {
    match serde_json::to_string(response) {
        Ok(frame) => {
            writeln!(out, "{frame}")?;
            out.flush()
        }
        Err(err) => {
            warn!("failed to serialize response: {err}");
            Ok(())
        }
    }
}
