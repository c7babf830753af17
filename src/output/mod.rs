//! Renderers over the walker's entry sequence.
//!
//! Each format is a pure function from `&[DirectoryEntry]` to a string:
//!
//! - `text` - ASCII tree-connector lines
//! - `mermaid` - fenced Mermaid flowchart block
//!
//! Renderers never touch the filesystem; the same walk renders to every
//! format byte-identically on repeat.

pub mod mermaid;
pub mod text;

use std::path::Path;

use crate::tree::DirectoryEntry;

/// Header label for a walk root: its base name plus a trailing slash.
pub fn root_label(root: &Path) -> String {
    match root.file_name() {
        Some(name) => format!("{}/", name.to_string_lossy()),
        None => "/".to_string(),
    }
}

/// Tally of a walked sequence as (directories, files).
pub fn count_kinds(entries: &[DirectoryEntry]) -> (usize, usize) {
    let dirs = entries.iter().filter(|e| e.kind.is_dir()).count();
    (dirs, entries.len() - dirs)
}
