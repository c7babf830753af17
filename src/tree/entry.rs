//! Records emitted by the walker.

/// Filesystem node kind as seen by the walker.
///
/// Kind comes from the directory entry's own file type, which does not
/// follow symlinks, so a link to a directory is reported as [`File`] and
/// never descended into.
///
/// [`File`]: EntryKind::File
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One filesystem node observed during a walk.
///
/// Entries appear in depth-first pre-order: a directory is immediately
/// followed by its filtered, sorted children. The walk root itself is not
/// part of the sequence; callers render it as a synthetic header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name only, lossily decoded to UTF-8.
    pub name: String,
    pub kind: EntryKind,
    /// Zero for immediate children of the walk root.
    pub depth: usize,
    /// True iff this entry is the last of its sorted, filtered siblings.
    pub is_last: bool,
    /// Whether each ancestor, outermost first and excluding the root, was
    /// the last sibling at its level. Chooses between continuation and
    /// blank indentation when rendering.
    pub ancestor_last: Vec<bool>,
}
