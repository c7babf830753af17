//! Error types shared by every tool handler.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single tool invocation.
///
/// Every variant renders as one human-readable line. The protocol layer
/// forwards that text to the caller inside an `isError` result; the CLI
/// prints it to stderr. Neither surface ever panics on a `ToolError`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments failed validation against the tool's input schema.
    /// Raised before any filesystem, process, or network side effect.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A read failed partway through a walk. The whole call is aborted;
    /// callers never see a partial entry sequence.
    #[error("failed to read {}: {source}", .path.display())]
    Traversal { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to run command: {0}")]
    CommandFailed(io::Error),

    #[error("command timed out after {0}s")]
    CommandTimeout(u64),

    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("registry lookup failed: {0}")]
    Registry(String),
}
