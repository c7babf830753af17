//! Shell command execution tool.

use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ToolError;

use super::{Tool, parse_arguments};

/// Per-stream cap on reported output.
const MAX_OUTPUT_BYTES: usize = 16 * 1024;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunCommandParams {
    command: String,
    #[serde(default)]
    working_dir: Option<String>,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Runs a shell command and reports its exit status and output.
pub struct RunCommand;

impl Tool for RunCommand {
    fn name(&self) -> &'static str {
        "run_command"
    }

    fn description(&self) -> &'static str {
        "Run a shell command (via `sh -c`) and report its exit status, \
         stdout, and stderr. Output is truncated per stream; a non-zero \
         exit status is reported, not treated as a failure."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "Command line to run."
                },
                "workingDir": {
                    "type": "string",
                    "description": "Directory to run in. Defaults to the current working directory."
                },
                "timeoutSecs": {
                    "type": "integer",
                    "description": "Seconds to wait before giving up. Defaults to 30."
                }
            },
            "required": ["command"]
        })
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let params: RunCommandParams = parse_arguments(arguments)?;
        if params.command.trim().is_empty() {
            return Err(ToolError::InvalidInput(
                "command must not be empty".to_string(),
            ));
        }

        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(&params.command);
        if let Some(dir) = &params.working_dir {
            cmd.current_dir(dir);
        }
        debug!("running `{}` with {}s timeout", params.command, params.timeout_secs);

        let output = run_with_timeout(cmd, params.timeout_secs)?;
        Ok(report(&output))
    }
}

/// Runs a command to completion with a wall-clock limit.
///
/// The child is moved into a collector thread so the wait can be bounded
/// by `recv_timeout`. On timeout the child is left to that thread, which
/// reaps it whenever it eventually exits; the call itself returns
/// [`ToolError::CommandTimeout`] immediately.
fn run_with_timeout(mut cmd: Command, timeout_secs: u64) -> Result<Output, ToolError> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).stdin(Stdio::null());
    let child = cmd.spawn().map_err(ToolError::CommandFailed)?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(child.wait_with_output());
    });

    match rx.recv_timeout(Duration::from_secs(timeout_secs)) {
        Ok(result) => result.map_err(ToolError::CommandFailed),
        Err(_) => Err(ToolError::CommandTimeout(timeout_secs)),
    }
}

/// Formats status and both streams; the shape is fixed so callers can
/// rely on the section markers.
fn report(output: &Output) -> String {
    let status = match output.status.code() {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    };
    let stdout = truncate(&String::from_utf8_lossy(&output.stdout), MAX_OUTPUT_BYTES);
    let stderr = truncate(&String::from_utf8_lossy(&output.stderr), MAX_OUTPUT_BYTES);

    let mut text = format!("exit status: {status}\n--- stdout ---\n{stdout}");
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str("--- stderr ---\n");
    text.push_str(&stderr);
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Truncates to `max_bytes` on a char boundary, noting how much was cut.
fn truncate(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let dropped = text.len() - end;
    format!("{}\n[truncated {dropped} bytes]", &text[..end])
}
