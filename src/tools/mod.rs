//! Tool handlers and their registry.
//!
//! Every tool is stateless: it validates its arguments against the schema
//! it declares, performs one call against the filesystem, the shell, or
//! the NPM registry, and returns a single text result. Validation happens
//! by deserializing the arguments into the tool's parameter struct, so a
//! missing or ill-typed field is rejected before any side effect.

pub mod diagram;
pub mod npm;
pub mod shell;
pub mod tree;

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ToolError;

/// A stateless tool handler.
pub trait Tool {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// JSON schema for the `arguments` object of a call.
    fn input_schema(&self) -> Value;
    fn call(&self, arguments: Value) -> Result<String, ToolError>;
}

/// Every tool served over the protocol, in listing order.
pub fn registry() -> Vec<Box<dyn Tool>> {
    vec![
        Box::new(tree::GenerateDirectoryTree),
        Box::new(diagram::GenerateDirectoryDiagram),
        Box::new(shell::RunCommand),
        Box::new(npm::NpmPackageInfo),
    ]
}

/// Deserializes tool arguments, mapping failures to [`ToolError::InvalidInput`].
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|err| ToolError::InvalidInput(err.to_string()))
}

/// Resolves an optional root argument to a canonical directory path.
///
/// `None` means the current working directory. A path that does not exist
/// maps to [`ToolError::PathNotFound`]; the walker separately rejects
/// non-directories.
pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf, ToolError> {
    let raw = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().map_err(|source| ToolError::Traversal {
            path: PathBuf::from("."),
            source,
        })?,
    };
    fs::canonicalize(&raw).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ToolError::PathNotFound(raw.clone()),
        _ => ToolError::Traversal { path: raw.clone(), source },
    })
}

/// Writes an assembled document and reports the absolute path written.
///
/// Callers assemble the complete string first; a failed walk or render
/// never reaches this point, so no partial file is ever produced.
pub fn write_document(path: &Path, contents: &str) -> Result<PathBuf, ToolError> {
    let absolute = std::path::absolute(path).map_err(|source| ToolError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(&absolute, contents).map_err(|source| ToolError::Write {
        path: absolute.clone(),
        source,
    })?;
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use crate::test_utils::TempTree;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        required: String,
    }

    #[test]
    fn test_parse_arguments_reports_missing_fields() {
        let err = parse_arguments::<Params>(json!({})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("required"), "got: {message}");
    }

    #[test]
    fn test_parse_arguments_accepts_valid_objects() {
        let params: Params = parse_arguments(json!({ "required": "x" })).unwrap();
        assert_eq!(params.required, "x");
    }

    #[test]
    fn test_resolve_root_missing_path() {
        let tree = TempTree::new();
        let missing = tree.path().join("nope");
        let err = resolve_root(Some(&missing)).unwrap_err();
        assert!(matches!(err, ToolError::PathNotFound(_)));
    }

    #[test]
    fn test_resolve_root_canonicalizes() {
        let tree = TempTree::new();
        tree.dir("sub");
        let resolved = resolve_root(Some(&tree.path().join("sub"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("sub"));
    }

    #[test]
    fn test_write_document_creates_file() {
        let tree = TempTree::new();
        let target = tree.path().join("out.txt");
        let written = write_document(&target, "hello\n").unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "hello\n");
    }

    #[test]
    fn test_registry_names_are_unique() {
        let tools = registry();
        let mut names: Vec<_> = tools.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tools.len());
    }
}
