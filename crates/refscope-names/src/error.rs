//! Error types for reference name construction.
//!
//! Classifying a name never fails; these errors only come from building a
//! canonical name out of parts.

use thiserror::Error;

/// Errors that can occur while building a reference name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefNameError {
    /// A branch or tag short name breaks the naming rules.
    #[error("invalid {kind} name: {name}: {reason}")]
    InvalidShortName {
        kind: &'static str,
        name: String,
        reason: String,
    },

    /// A namespace is not a single well-formed path component.
    #[error("invalid namespace: {name}: {reason}")]
    InvalidNamespace { name: String, reason: String },

    /// Only valid names can be wrapped in a namespace.
    #[error("cannot namespace an invalid reference name: {name:?}")]
    InvalidInner { name: String },
}

/// Convenience type alias for name construction.
pub type Result<T> = std::result::Result<T, RefNameError>;
