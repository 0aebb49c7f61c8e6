//! Short-name validation following git-style conventions.
//!
//! These rules gate the construction of canonical names from parts
//! ([`RefName::branch`](crate::RefName::branch) and friends). The classifier
//! itself is more lenient and accepts any name without empty segments.
//!
//! Valid short names:
//! - Must be non-empty
//! - Must not contain whitespace, `~`, `^`, `:`, `?`, `*`, `[`, `\`
//! - Must not contain `..` (double dot) or `@{`
//! - Must not start or end with `.` or `/`
//! - Must not end with `.lock`
//! - Components between slashes must be non-empty and must not start with `.`

use crate::error::{RefNameError, Result};

/// Characters that are forbidden anywhere in a short name.
const FORBIDDEN_CHARS: &[char] = &[' ', '\t', '\n', '\r', '~', '^', ':', '?', '*', '[', '\\'];

/// Returns the first rule `name` breaks, if any.
fn check_short_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("must not be empty".into());
    }

    if let Some(ch) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Some(format!("contains forbidden character: {ch:?}"));
    }

    if name.contains("..") {
        return Some("must not contain '..'".into());
    }

    // Reflog syntax.
    if name.contains("@{") {
        return Some("must not contain '@{'".into());
    }

    if name.starts_with('.') || name.ends_with('.') {
        return Some("must not start or end with '.'".into());
    }

    if name.starts_with('/') || name.ends_with('/') {
        return Some("must not start or end with '/'".into());
    }

    if name.ends_with(".lock") {
        return Some("must not end with '.lock'".into());
    }

    for component in name.split('/') {
        if component.is_empty() {
            return Some("path components must not be empty".into());
        }
        if component.starts_with('.') {
            return Some(format!("component must not start with '.': {component:?}"));
        }
    }

    None
}

/// Validate a short name for the given kind label (`"branch"`, `"tag"`).
pub fn validate_short_name(kind: &'static str, name: &str) -> Result<()> {
    match check_short_name(name) {
        Some(reason) => Err(RefNameError::InvalidShortName {
            kind,
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Validate a branch short name such as `feature/auth`.
///
/// # Examples
///
/// ```
/// use refscope_names::validate::validate_branch_name;
///
/// assert!(validate_branch_name("main").is_ok());
/// assert!(validate_branch_name("feature/auth").is_ok());
/// assert!(validate_branch_name("").is_err());
/// assert!(validate_branch_name("bad..name").is_err());
/// ```
pub fn validate_branch_name(name: &str) -> Result<()> {
    validate_short_name("branch", name)
}

/// Validate a tag short name. Same rules as branch names.
pub fn validate_tag_name(name: &str) -> Result<()> {
    validate_short_name("tag", name)
}

/// Validate a namespace. Must be a single component (no slashes).
pub fn validate_namespace(name: &str) -> Result<()> {
    if name.contains('/') {
        return Err(RefNameError::InvalidNamespace {
            name: name.to_string(),
            reason: "must not contain '/'".into(),
        });
    }
    match check_short_name(name) {
        Some(reason) => Err(RefNameError::InvalidNamespace {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
