//! Canopy - stateless workspace tools for IDE assistants, served over stdio.
//!
//! The core is a deterministic directory walker ([`tree`]) feeding pure
//! renderers ([`output`]). The [`tools`] layer wraps those, plus a shell
//! runner and an NPM registry lookup, behind declared JSON schemas, and
//! [`server`] speaks line-delimited JSON-RPC 2.0 over stdin/stdout.

pub mod error;
pub mod output;
pub mod rpc;
pub mod server;
pub mod tools;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ToolError;
pub use tree::{DirectoryEntry, EntryKind, TraversalPolicy, TreeWalker};
