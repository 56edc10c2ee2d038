//! Path normalization and joining.
//!
//! # Design Decisions
//! - Normalized form: leading `/`, no trailing `/` (except root), no empty segments
//! - Relative route paths are joined onto the parent's full path
//! - Matching is case-sensitive; nothing here changes case

/// Normalize a raw navigation path.
///
/// Strips query and fragment, accepts hash-mode URLs (`#/ViewVC`), collapses
/// repeated slashes and removes a trailing slash.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let end = raw.find(['?', '#']).unwrap_or(raw.len());

    let segments: Vec<&str> = raw[..end].split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Join a route path onto its parent's full path.
///
/// Absolute children (leading `/`) are kept as written.
pub fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_string();
    }
    if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}

/// Check that a configured path is already in normalized form.
///
/// Returns the reason it is not, if any.
pub(crate) fn check(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("path is empty");
    }
    if path.contains(['?', '#']) {
        return Err("query and fragment are not part of a route path");
    }
    if path.chars().any(char::is_whitespace) {
        return Err("path contains whitespace");
    }
    if path.contains("//") {
        return Err("path contains an empty segment");
    }
    if path != "/" && path.ends_with('/') {
        return Err("path has a trailing slash");
    }
    Ok(())
}
