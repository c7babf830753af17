//! Depth-first directory walker.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToolError;

use super::entry::{DirectoryEntry, EntryKind};
use super::filter::is_excluded;
use super::policy::TraversalPolicy;
use super::sort::sibling_order;

/// Walks a directory tree depth-first in pre-order, producing the flat
/// sequence described in [`DirectoryEntry`].
///
/// The sequence for a given root and policy over an unchanged filesystem
/// is deterministic: children are sorted explicitly before emission, so
/// OS iteration order never leaks through. Any listing failure below the
/// root aborts the whole walk; callers get either the complete sequence
/// or an error, never a partial tree.
pub struct TreeWalker {
    policy: TraversalPolicy,
}

/// One listed child before emission: enough to filter, sort, and recurse.
struct Child {
    name: String,
    kind: EntryKind,
    path: PathBuf,
}

impl TreeWalker {
    pub fn new(policy: TraversalPolicy) -> Self {
        Self { policy }
    }

    /// Walks `root`, which must be an existing directory.
    pub fn walk(&self, root: &Path) -> Result<Vec<DirectoryEntry>, ToolError> {
        if !root.exists() {
            return Err(ToolError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ToolError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = Vec::new();
        self.walk_dir(root, 0, &[], &mut entries)?;
        Ok(entries)
    }

    fn walk_dir(
        &self,
        dir: &Path,
        depth: usize,
        ancestor_last: &[bool],
        out: &mut Vec<DirectoryEntry>,
    ) -> Result<(), ToolError> {
        if depth >= self.policy.max_depth {
            return Ok(());
        }

        let mut children = self.list_children(dir)?;
        children.sort_by(|a, b| {
            sibling_order((a.kind, a.name.as_str()), (b.kind, b.name.as_str()))
        });

        let count = children.len();
        for (index, child) in children.into_iter().enumerate() {
            let is_last = index + 1 == count;
            out.push(DirectoryEntry {
                name: child.name,
                kind: child.kind,
                depth,
                is_last,
                ancestor_last: ancestor_last.to_vec(),
            });
            if child.kind.is_dir() {
                let mut flags = ancestor_last.to_vec();
                flags.push(is_last);
                self.walk_dir(&child.path, depth + 1, &flags, out)?;
            }
        }
        Ok(())
    }

    /// Lists and filters the children of one directory, unsorted.
    fn list_children(&self, dir: &Path) -> Result<Vec<Child>, ToolError> {
        let read_dir = fs::read_dir(dir).map_err(|source| ToolError::Traversal {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut children = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| ToolError::Traversal {
                path: dir.to_path_buf(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_excluded(&name, &self.policy.exclude_patterns) {
                continue;
            }
            // file_type() does not follow symlinks: a link to a directory
            // counts as a file and is never descended into, so the walk
            // cannot loop.
            let file_type = entry.file_type().map_err(|source| ToolError::Traversal {
                path: entry.path(),
                source,
            })?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            children.push(Child {
                name,
                kind,
                path: entry.path(),
            });
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;

    fn walk(tree: &TempTree, policy: TraversalPolicy) -> Vec<DirectoryEntry> {
        TreeWalker::new(policy)
            .walk(tree.path())
            .expect("walk should succeed")
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_preorder_with_dirs_first() {
        let tree = TempTree::new();
        tree.file("b.txt", "");
        tree.dir("a");
        tree.file("c/z.txt", "");

        let entries = walk(&tree, TraversalPolicy::default());
        assert_eq!(names(&entries), vec!["a", "c", "z.txt", "b.txt"]);
    }

    #[test]
    fn test_last_sibling_and_ancestor_flags() {
        let tree = TempTree::new();
        tree.file("b.txt", "");
        tree.dir("a");
        tree.file("c/z.txt", "");

        let entries = walk(&tree, TraversalPolicy::default());
        let is_last: Vec<bool> = entries.iter().map(|e| e.is_last).collect();
        assert_eq!(is_last, vec![false, false, true, true]);
        // z.txt sits under c, which was not the last sibling.
        assert_eq!(entries[2].ancestor_last, vec![false]);
        assert_eq!(entries[2].depth, 1);
    }

    #[test]
    fn test_max_depth_zero_emits_nothing() {
        let tree = TempTree::new();
        tree.file("deep/deeper/file.txt", "");

        let entries = walk(
            &tree,
            TraversalPolicy {
                max_depth: 0,
                ..TraversalPolicy::default()
            },
        );
        assert!(entries.is_empty(), "got {entries:?}");
    }

    #[test]
    fn test_max_depth_bounds_emitted_depth() {
        let tree = TempTree::new();
        tree.file("l1/l2/l3/l4/file.txt", "");

        let entries = walk(
            &tree,
            TraversalPolicy {
                max_depth: 2,
                ..TraversalPolicy::default()
            },
        );
        assert_eq!(names(&entries), vec!["l1", "l2"]);
        assert!(entries.iter().all(|e| e.depth < 2));
    }

    #[test]
    fn test_exclusion_is_total() {
        let tree = TempTree::new();
        tree.file("node_modules/left/marker.txt", "");
        tree.file("src/kept.txt", "");

        let entries = walk(&tree, TraversalPolicy::default());
        assert_eq!(names(&entries), vec!["src", "kept.txt"]);
    }

    #[test]
    fn test_missing_root() {
        let tree = TempTree::new();
        let missing = tree.path().join("absent");
        let result = TreeWalker::new(TraversalPolicy::default()).walk(&missing);
        assert!(matches!(result, Err(ToolError::PathNotFound(_))));
    }

    #[test]
    fn test_file_root() {
        let tree = TempTree::new();
        let file = tree.file("plain.txt", "x");
        let result = TreeWalker::new(TraversalPolicy::default()).walk(&file);
        assert!(matches!(result, Err(ToolError::NotADirectory(_))));
    }

    #[test]
    fn test_empty_directory_is_listed() {
        let tree = TempTree::new();
        tree.dir("empty");

        let entries = walk(&tree, TraversalPolicy::default());
        assert_eq!(names(&entries), vec!["empty"]);
        assert!(entries[0].kind.is_dir());
    }
}
