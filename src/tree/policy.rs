//! Walk configuration.

/// Depth applied when a caller does not set one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Exclusions applied when a caller does not supply a pattern list.
pub const DEFAULT_EXCLUDES: [&str; 4] = ["node_modules", ".git", "build", "dist"];

/// Immutable configuration for a single walk.
#[derive(Debug, Clone)]
pub struct TraversalPolicy {
    /// Number of levels below the root to include. A listing that would
    /// emit entries at this depth is skipped entirely, so `0` walks
    /// nothing and no emitted entry ever has `depth >= max_depth`.
    pub max_depth: usize,
    /// Names containing any of these as a literal substring are skipped,
    /// together with everything beneath them.
    pub exclude_patterns: Vec<String>,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_patterns: DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
