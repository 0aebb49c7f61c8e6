//! Reference name classification.
//!
//! This crate takes a raw reference path such as `refs/heads/feature/cool`,
//! `HEAD` or `refs/namespaces/foo/refs/heads/master` and decomposes it into a
//! [`RefName`]: a category ([`RefKind`]), the enclosing namespaces, the scope
//! path and the leaf name. It works purely on text; it never looks at a
//! repository and has no idea whether a name points anywhere.
//!
//! # Classification order
//!
//! The first matching rule wins:
//!
//! 1. Empty or malformed input (empty segments, surrounding whitespace) is
//!    [`RefKind::Invalid`].
//! 2. `HEAD` and `MERGE_HEAD` are bare specials.
//! 3. `refs/stage` and `refs/notes/commit` are rooted specials.
//! 4. Leading `refs/namespaces/<ns>/` layers are peeled off, outermost first.
//! 5. `refs/heads/...` is a branch, `refs/tags/...` a tag.
//! 6. Anything else under `refs/` is peculiar; everything else is custom.
//!
//! # Modules
//!
//! - [`error`] — Error types for building names from parts
//! - [`kind`] — The [`RefKind`] category enum
//! - [`name`] — The classified [`RefName`] value
//! - [`validate`] — Branch/tag/namespace short-name validation

pub mod error;
pub mod kind;
pub mod name;
pub mod validate;

pub use error::{RefNameError, Result};
pub use kind::RefKind;
pub use name::RefName;
pub use validate::{validate_branch_name, validate_namespace, validate_tag_name};
