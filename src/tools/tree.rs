//! Text-tree generation tool.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ToolError;
use crate::output;
use crate::tree::{DEFAULT_EXCLUDES, DEFAULT_MAX_DEPTH, TraversalPolicy, TreeWalker};

use super::{Tool, parse_arguments, resolve_root, write_document};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeParams {
    #[serde(default)]
    path: Option<String>,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
    #[serde(default = "default_excludes")]
    exclude_patterns: Vec<String>,
    output_path: String,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}

/// Walks a directory and writes an ASCII tree of its contents to a file.
pub struct GenerateDirectoryTree;

impl Tool for GenerateDirectoryTree {
    fn name(&self) -> &'static str {
        "generate_directory_tree"
    }

    fn description(&self) -> &'static str {
        "Walk a directory and write an ASCII tree of its contents to a file. \
         Directories sort before files; excluded names are skipped entirely."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory to walk. Defaults to the current working directory."
                },
                "maxDepth": {
                    "type": "integer",
                    "description": "Number of levels below the root to include. Defaults to 3."
                },
                "excludePatterns": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Entries whose name contains any of these substrings are skipped. Defaults to [\"node_modules\", \".git\", \"build\", \"dist\"]."
                },
                "outputPath": {
                    "type": "string",
                    "description": "File to write the rendered tree to."
                }
            },
            "required": ["outputPath"]
        })
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let params: TreeParams = parse_arguments(arguments)?;
        let root = resolve_root(params.path.as_deref().map(Path::new))?;
        debug!("walking {} to depth {}", root.display(), params.max_depth);

        let policy = TraversalPolicy {
            max_depth: params.max_depth,
            exclude_patterns: params.exclude_patterns,
        };
        let entries = TreeWalker::new(policy).walk(&root)?;
        let document = output::text::render_document(&output::root_label(&root), &entries);
        let written = write_document(Path::new(&params.output_path), &document)?;

        let (dirs, files) = output::count_kinds(&entries);
        Ok(format!(
            "Directory tree for {} written to {} ({dirs} directories, {files} files)",
            root.display(),
            written.display()
        ))
    }
}
