//! ASCII tree rendering.

use crate::tree::DirectoryEntry;

/// Renders one line per entry, joined by newlines, without the header.
///
/// Each line is built from the entry's ancestor flags (blank indent where
/// the ancestor was a last sibling, a continuation bar otherwise), a
/// connector chosen by the entry's own last-sibling flag, and the name
/// with a trailing `/` for directories.
pub fn render(entries: &[DirectoryEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut line = String::new();
        for &ancestor_was_last in &entry.ancestor_last {
            line.push_str(if ancestor_was_last { "    " } else { "│   " });
        }
        line.push_str(if entry.is_last { "└── " } else { "├── " });
        line.push_str(&entry.name);
        if entry.kind.is_dir() {
            line.push('/');
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Full text-tree document: header line, body, trailing newline.
///
/// An empty walk renders as the bare header, so the written file always
/// has `entries + 1` lines.
pub fn render_document(root_label: &str, entries: &[DirectoryEntry]) -> String {
    if entries.is_empty() {
        return format!("{root_label}\n");
    }
    format!("{root_label}\n{}\n", render(entries))
}
