//! Small text helpers shared by the rule engines.

/// Lower-cases and trims an optional field, treating `None` as empty.
pub fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// True when either string contains the other (both expected lower-case).
///
/// Empty strings never match; otherwise `""` would be contained in everything.
pub fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// True when `haystack` contains any of the given needles.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
