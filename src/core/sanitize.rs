// src/core/sanitize.rs

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Display name → image file stem: lowercase, spaces to underscores,
/// periods dropped. Other punctuation passes through untouched.
pub fn image_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace('.', "")
}
