//! Classified reference names.
//!
//! A [`RefName`] is produced once from a raw string and never changes. All
//! derived fields follow from the raw text alone, so two names compare equal
//! exactly when their raw strings do.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RefNameError, Result};
use crate::kind::RefKind;
use crate::validate::{validate_branch_name, validate_namespace, validate_tag_name};

const REFS_PREFIX: &str = "refs/";
const NAMESPACES_PREFIX: &str = "refs/namespaces/";
const HEADS_PREFIX: &str = "refs/heads/";
const TAGS_PREFIX: &str = "refs/tags/";

/// A reference name decomposed into category, namespaces, scopes and leaf.
///
/// # Examples
///
/// ```
/// use refscope_names::RefName;
///
/// let name = RefName::parse("refs/namespaces/foo/refs/heads/feature/cool");
/// assert!(name.is_branch());
/// assert!(name.is_namespaced());
/// assert_eq!(name.name(), "cool");
/// assert_eq!(name.branch_name(), "feature/cool");
/// assert_eq!(name.namespace_name(), "foo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RefName {
    raw: String,
    kind: RefKind,
    namespaces: Vec<String>,
    scopes: Vec<String>,
    leaf: String,
    /// Byte offset of the text left after namespace unwrapping.
    inner: usize,
}

/// Everything derived from the raw string.
struct Parts {
    kind: RefKind,
    namespaces: Vec<String>,
    scopes: Vec<String>,
    leaf: String,
    inner: usize,
}

impl Parts {
    fn invalid() -> Self {
        Self::opaque(RefKind::Invalid, Vec::new(), 0)
    }

    fn opaque(kind: RefKind, namespaces: Vec<String>, inner: usize) -> Self {
        Self {
            kind,
            namespaces,
            scopes: Vec::new(),
            leaf: String::new(),
            inner,
        }
    }

    /// `short` is the part after `refs/heads/` or `refs/tags/`.
    fn hierarchical(kind: RefKind, namespaces: Vec<String>, short: &str, inner: usize) -> Self {
        let (scopes, leaf) = match short.rsplit_once('/') {
            Some((scope, leaf)) => (scope.split('/').map(str::to_owned).collect(), leaf),
            None => (Vec::new(), short),
        };
        Self {
            kind,
            namespaces,
            scopes,
            leaf: leaf.to_owned(),
            inner,
        }
    }
}

/// Decompose `raw`, or explain why it is malformed.
fn classify(raw: &str) -> std::result::Result<Parts, &'static str> {
    if raw.is_empty() {
        return Err("empty name");
    }
    if raw.trim() != raw {
        return Err("leading or trailing whitespace");
    }
    if raw.split('/').any(str::is_empty) {
        return Err("empty path segment");
    }

    match raw {
        "HEAD" => return Ok(Parts::opaque(RefKind::SpecialHead, Vec::new(), 0)),
        "MERGE_HEAD" => return Ok(Parts::opaque(RefKind::SpecialMergeHead, Vec::new(), 0)),
        "refs/stage" => return Ok(Parts::opaque(RefKind::SpecialStage, Vec::new(), 0)),
        "refs/notes/commit" => {
            return Ok(Parts::opaque(RefKind::SpecialCommitNote, Vec::new(), 0));
        }
        _ => {}
    }

    let mut namespaces = Vec::new();
    let mut rest = raw;
    while let Some((namespace, inner)) = rest
        .strip_prefix(NAMESPACES_PREFIX)
        .and_then(|after| after.split_once('/'))
    {
        namespaces.push(namespace.to_owned());
        rest = inner;
    }
    if rest.is_empty() {
        return Err("nothing left after namespaces");
    }
    let inner = raw.len() - rest.len();

    let parts = if let Some(short) = rest.strip_prefix(HEADS_PREFIX) {
        Parts::hierarchical(RefKind::Branch, namespaces, short, inner)
    } else if let Some(short) = rest.strip_prefix(TAGS_PREFIX) {
        Parts::hierarchical(RefKind::Tag, namespaces, short, inner)
    } else if rest.starts_with(REFS_PREFIX) {
        Parts::opaque(RefKind::Peculiar, namespaces, inner)
    } else {
        Parts::opaque(RefKind::Custom, namespaces, inner)
    };
    Ok(parts)
}

impl RefName {
    /// Classify a raw reference name. Never fails; malformed input yields a
    /// name of kind [`RefKind::Invalid`].
    pub fn parse(raw: &str) -> Self {
        Self::from_raw(raw.to_owned())
    }

    fn from_raw(raw: String) -> Self {
        let parts = classify(&raw).unwrap_or_else(|reason| {
            debug!(raw = %raw, reason, "invalid reference name");
            Parts::invalid()
        });
        trace!(raw = %raw, kind = %parts.kind, "classified reference name");
        Self {
            raw,
            kind: parts.kind,
            namespaces: parts.namespaces,
            scopes: parts.scopes,
            leaf: parts.leaf,
            inner: parts.inner,
        }
    }

    /// Canonical name of a local branch, e.g. `refs/heads/feature/cool`.
    pub fn branch(short: &str) -> Result<Self> {
        validate_branch_name(short)?;
        Ok(Self::from_raw(format!("{HEADS_PREFIX}{short}")))
    }

    /// Canonical name of a tag, e.g. `refs/tags/v1.0`.
    pub fn tag(short: &str) -> Result<Self> {
        validate_tag_name(short)?;
        Ok(Self::from_raw(format!("{TAGS_PREFIX}{short}")))
    }

    /// Wrap this name in one more namespace layer, which becomes the
    /// outermost one.
    ///
    /// The wrapped name is classified again, so bare specials such as `HEAD`
    /// come back as namespaced custom names.
    pub fn in_namespace(&self, namespace: &str) -> Result<Self> {
        validate_namespace(namespace)?;
        if !self.is_valid() {
            return Err(RefNameError::InvalidInner {
                name: self.raw.clone(),
            });
        }
        Ok(Self::from_raw(format!(
            "{NAMESPACES_PREFIX}{namespace}/{}",
            self.raw
        )))
    }

    /// The original input, verbatim.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> RefKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.kind != RefKind::Invalid
    }

    pub fn is_branch(&self) -> bool {
        self.kind == RefKind::Branch
    }

    pub fn is_tag(&self) -> bool {
        self.kind == RefKind::Tag
    }

    /// Returns `true` for `HEAD`, `MERGE_HEAD`, `refs/stage` and
    /// `refs/notes/commit`.
    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn is_commit_note(&self) -> bool {
        self.kind == RefKind::SpecialCommitNote
    }

    pub fn is_head(&self) -> bool {
        self.kind == RefKind::SpecialHead
    }

    pub fn is_merge_head(&self) -> bool {
        self.kind == RefKind::SpecialMergeHead
    }

    pub fn is_stage(&self) -> bool {
        self.kind == RefKind::SpecialStage
    }

    pub fn is_peculiar(&self) -> bool {
        self.kind == RefKind::Peculiar
    }

    pub fn is_custom(&self) -> bool {
        self.kind == RefKind::Custom
    }

    pub fn is_namespaced(&self) -> bool {
        !self.namespaces.is_empty()
    }

    /// Returns `true` when a branch or tag has path segments between its
    /// root and its leaf.
    pub fn is_scoped(&self) -> bool {
        !self.scopes.is_empty()
    }

    /// Leaf segment of a branch or tag; empty for every other kind.
    pub fn name(&self) -> &str {
        &self.leaf
    }

    /// Scoped short name of a branch (`feature/cool`); empty otherwise.
    pub fn branch_name(&self) -> &str {
        match self.kind {
            RefKind::Branch => self.short_after(HEADS_PREFIX),
            _ => "",
        }
    }

    /// Scoped short name of a tag; empty otherwise.
    pub fn tag_name(&self) -> &str {
        match self.kind {
            RefKind::Tag => self.short_after(TAGS_PREFIX),
            _ => "",
        }
    }

    /// Intermediate segments of a branch or tag, outermost first.
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn scope_name(&self) -> String {
        self.scopes.join("/")
    }

    /// Enclosing namespaces, outermost first.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn namespace_name(&self) -> String {
        self.namespaces.join("/")
    }

    /// Human-facing short form, ignoring namespaces.
    ///
    /// Branches and tags drop their root, peculiar names drop `refs/`,
    /// specials and custom names are shown as-is. Invalid names have none.
    pub fn shorthand(&self) -> &str {
        match self.kind {
            RefKind::Branch => self.short_after(HEADS_PREFIX),
            RefKind::Tag => self.short_after(TAGS_PREFIX),
            RefKind::Peculiar => self.short_after(REFS_PREFIX),
            RefKind::Invalid => "",
            _ => &self.raw[self.inner..],
        }
    }

    fn short_after(&self, prefix: &str) -> &str {
        &self.raw[self.inner + prefix.len()..]
    }
}

impl fmt::Display for RefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for RefName {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for RefName {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl From<RefName> for String {
    fn from(name: RefName) -> Self {
        name.raw
    }
}

impl FromStr for RefName {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_.-]{0,8}"
    }

    fn hierarchical() -> impl Strategy<Value = (Vec<String>, String)> {
        (prop::collection::vec(segment(), 0..4), segment())
    }

    fn expected_short(scopes: &[String], leaf: &str) -> String {
        if scopes.is_empty() {
            leaf.to_owned()
        } else {
            format!("{}/{leaf}", scopes.join("/"))
        }
    }

    proptest! {
        #[test]
        fn branch_decomposition((scopes, leaf) in hierarchical()) {
            let raw = format!("refs/heads/{}", expected_short(&scopes, &leaf));
            let rn = RefName::parse(&raw);
            prop_assert!(rn.is_branch());
            prop_assert_eq!(rn.name(), leaf.as_str());
            prop_assert_eq!(rn.scopes(), scopes.as_slice());
            prop_assert_eq!(rn.branch_name(), expected_short(&scopes, &leaf));
            prop_assert_eq!(rn.tag_name(), "");
            prop_assert_eq!(rn.is_scoped(), !scopes.is_empty());
        }

        #[test]
        fn tag_decomposition((scopes, leaf) in hierarchical()) {
            let raw = format!("refs/tags/{}", expected_short(&scopes, &leaf));
            let rn = RefName::parse(&raw);
            prop_assert!(rn.is_tag());
            prop_assert_eq!(rn.name(), leaf.as_str());
            prop_assert_eq!(rn.scopes(), scopes.as_slice());
            prop_assert_eq!(rn.tag_name(), expected_short(&scopes, &leaf));
            prop_assert_eq!(rn.branch_name(), "");
            prop_assert_eq!(rn.scope_name(), scopes.join("/"));
        }

        #[test]
        fn namespaces_unwrap_left_to_right(
            namespaces in prop::collection::vec(segment(), 1..4),
            (scopes, leaf) in hierarchical(),
        ) {
            let mut raw = format!("refs/heads/{}", expected_short(&scopes, &leaf));
            for ns in namespaces.iter().rev() {
                raw = format!("refs/namespaces/{ns}/{raw}");
            }
            let rn = RefName::parse(&raw);
            prop_assert!(rn.is_branch());
            prop_assert!(rn.is_namespaced());
            prop_assert_eq!(rn.namespaces(), namespaces.as_slice());
            prop_assert_eq!(rn.namespace_name(), namespaces.join("/"));
            prop_assert_eq!(rn.name(), leaf.as_str());
        }

        #[test]
        fn reclassifying_is_idempotent(raw in "(refs/|HEAD|MERGE_HEAD)?[a-z/ ]{0,24}") {
            let rn = RefName::parse(&raw);
            prop_assert_eq!(RefName::parse(rn.as_str()), rn);
        }

        #[test]
        fn exactly_one_category(raw in "(refs/(heads|tags|namespaces/x|notes)/)?\\PC{0,16}") {
            let rn = RefName::parse(&raw);
            let holding = RefKind::ALL
                .iter()
                .filter(|kind| match kind {
                    RefKind::Branch => rn.is_branch(),
                    RefKind::Tag => rn.is_tag(),
                    RefKind::SpecialHead => rn.is_head(),
                    RefKind::SpecialMergeHead => rn.is_merge_head(),
                    RefKind::SpecialStage => rn.is_stage(),
                    RefKind::SpecialCommitNote => rn.is_commit_note(),
                    RefKind::Peculiar => rn.is_peculiar(),
                    RefKind::Custom => rn.is_custom(),
                    RefKind::Invalid => !rn.is_valid(),
                })
                .count();
            prop_assert_eq!(holding, 1);
            prop_assert_eq!(rn.is_namespaced(), !rn.namespaces().is_empty());
            if !rn.kind().is_hierarchical() {
                prop_assert!(rn.scopes().is_empty());
                prop_assert_eq!(rn.name(), "");
            }
        }
    }
}
