//! Mermaid flowchart rendering.

use crate::tree::DirectoryEntry;

/// Reserved identifier for the synthetic root node.
const ROOT_ID: &str = "root";

/// Renders the walked sequence as a fenced Mermaid flowchart block.
///
/// Every node identifier is the parent's identifier, `_`, and the
/// sanitized entry name, so identically named entries in different
/// subtrees never collide. Entries must be a pre-order walker sequence;
/// that ordering guarantees each edge appears after both of its
/// endpoints' declarations.
pub fn render_document(root_label: &str, entries: &[DirectoryEntry]) -> String {
    let mut out = String::from("```mermaid\nflowchart TD\n");
    out.push_str(&format!("    {ROOT_ID}[{root_label}]\n"));

    // Identifier of the nearest enclosing directory per depth; an entry
    // at depth d finds its parent at index d.
    let mut parents: Vec<String> = vec![ROOT_ID.to_string()];
    for entry in entries {
        parents.truncate(entry.depth + 1);
        let parent = &parents[entry.depth];
        let id = format!("{parent}_{}", sanitize(&entry.name));
        if entry.kind.is_dir() {
            out.push_str(&format!("    {id}[{}/]\n", entry.name));
        } else {
            out.push_str(&format!("    {id}[{}]\n", entry.name));
        }
        out.push_str(&format!("    {parent} --> {id}\n"));
        if entry.kind.is_dir() {
            parents.push(id);
        }
    }
    out.push_str("```\n");
    out
}

/// Replaces every non-ASCII-alphanumeric character with `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
