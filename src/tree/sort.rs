//! Sibling ordering.

use std::cmp::Ordering;

use super::entry::EntryKind;

/// Total order on siblings: directories before files, then ascending name.
///
/// Names compare by Unicode code point (`str::cmp`), not locale collation,
/// so the same tree renders identically on every machine. Ties cannot
/// occur because names are unique within one directory.
pub fn sibling_order(a: (EntryKind, &str), b: (EntryKind, &str)) -> Ordering {
    match (a.0.is_dir(), b.0.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.1.cmp(b.1),
    }
}
