//! Deterministic directory traversal.
//!
//! One walk feeds every output format: [`TreeWalker`] visits a directory
//! depth-first in pre-order, applying exclusion and sorting before
//! emission, and produces a flat sequence of [`DirectoryEntry`] records.
//! Renderers in [`crate::output`] are pure functions over that sequence,
//! so new formats plug in without touching traversal.

mod entry;
mod filter;
mod policy;
mod sort;
mod walker;

pub use entry::{DirectoryEntry, EntryKind};
pub use filter::is_excluded;
pub use policy::{DEFAULT_EXCLUDES, DEFAULT_MAX_DEPTH, TraversalPolicy};
pub use sort::sibling_order;
pub use walker::TreeWalker;
