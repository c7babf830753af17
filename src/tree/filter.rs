//! Name-based exclusion.

/// Returns true iff `name` contains any pattern as a literal substring.
///
/// Matching is case-sensitive and unanchored, with no glob expansion:
/// pattern `.git` also hides `.github`, and `tmp` hides `notatmp`. An
/// empty pattern list excludes nothing; an empty pattern string matches
/// every name. The walker evaluates this once per entry before recursing,
/// so nothing beneath an excluded directory is ever visited.
pub fn is_excluded(name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| name.contains(pattern.as_str()))
}
