//! Flowchart diagram generation tool.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::ToolError;
use crate::output;
use crate::tree::{DEFAULT_MAX_DEPTH, TraversalPolicy, TreeWalker};

use super::{Tool, parse_arguments, resolve_root, write_document};

/// Exclusions applied when a diagram caller supplies none. Broader than
/// the text tree's set: diagrams drown in generated and editor clutter.
pub const DIAGRAM_EXCLUDES: [&str; 10] = [
    "node_modules",
    ".git",
    "build",
    "dist",
    ".next",
    "cache",
    ".woff2",
    ".DS_Store",
    ".idea",
    ".vscode",
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagramParams {
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
    DIAGRAM_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}

/// Forces a markdown extension: any existing extension is replaced and a
/// missing one is added.
pub fn markdown_output_path(path: &Path) -> PathBuf {
    let mut coerced = path.to_path_buf();
    coerced.set_extension("md");
    coerced
}

/// Walks a directory and writes a Mermaid flowchart of its layout to a
/// markdown file.
pub struct GenerateDirectoryDiagram;

impl Tool for GenerateDirectoryDiagram {
    fn name(&self) -> &'static str {
        "generate_directory_diagram"
    }

    fn description(&self) -> &'static str {
        "Walk a directory and write a Mermaid flowchart of its layout to a \
         markdown file. The output path is always given a .md extension."
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
                    "description": "Entries whose name contains any of these substrings are skipped. Defaults to a broad set covering dependency, build, cache, and editor clutter."
                },
                "outputPath": {
                    "type": "string",
                    "description": "File to write the diagram to; the extension is coerced to .md."
                }
            },
            "required": ["outputPath"]
        })
    }

    fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let params: DiagramParams = parse_arguments(arguments)?;
        let root = resolve_root(params.path.as_deref().map(Path::new))?;
        debug!("diagramming {} to depth {}", root.display(), params.max_depth);

        let policy = TraversalPolicy {
            max_depth: params.max_depth,
            exclude_patterns: params.exclude_patterns,
        };
        let entries = TreeWalker::new(policy).walk(&root)?;
        let document = output::mermaid::render_document(&output::root_label(&root), &entries);
        let target = markdown_output_path(Path::new(&params.output_path));
        let written = write_document(&target, &document)?;

        let (dirs, files) = output::count_kinds(&entries);
        Ok(format!(
            "Directory diagram for {} written to {} ({dirs} directories, {files} files)",
            root.display(),
            written.display()
        ))
    }
}
