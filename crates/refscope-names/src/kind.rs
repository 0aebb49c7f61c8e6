//! The closed set of reference categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a reference name.
///
/// Exactly one variant applies to any input, so the category predicates on
/// [`RefName`](crate::RefName) are mutually exclusive by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RefKind {
    /// `refs/heads/...`
    #[serde(rename = "branch")]
    Branch,
    /// `refs/tags/...`
    #[serde(rename = "tag")]
    Tag,
    /// The bare `HEAD` name.
    #[serde(rename = "head")]
    SpecialHead,
    /// The bare `MERGE_HEAD` name.
    #[serde(rename = "merge_head")]
    SpecialMergeHead,
    /// `refs/stage`
    #[serde(rename = "stage")]
    SpecialStage,
    /// `refs/notes/commit`
    #[serde(rename = "commit_note")]
    SpecialCommitNote,
    /// Rooted at `refs/` but not a recognised hierarchy.
    #[serde(rename = "peculiar")]
    Peculiar,
    /// Not rooted at `refs/` and not a bare special name.
    #[serde(rename = "custom")]
    Custom,
    /// Malformed input.
    #[serde(rename = "invalid")]
    Invalid,
}

impl RefKind {
    /// Every category, in declaration order.
    pub const ALL: [RefKind; 9] = [
        RefKind::Branch,
        RefKind::Tag,
        RefKind::SpecialHead,
        RefKind::SpecialMergeHead,
        RefKind::SpecialStage,
        RefKind::SpecialCommitNote,
        RefKind::Peculiar,
        RefKind::Custom,
        RefKind::Invalid,
    ];

    /// Stable lowercase label, shared with the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            RefKind::Branch => "branch",
            RefKind::Tag => "tag",
            RefKind::SpecialHead => "head",
            RefKind::SpecialMergeHead => "merge_head",
            RefKind::SpecialStage => "stage",
            RefKind::SpecialCommitNote => "commit_note",
            RefKind::Peculiar => "peculiar",
            RefKind::Custom => "custom",
            RefKind::Invalid => "invalid",
        }
    }

    /// Returns `true` for `HEAD`, `MERGE_HEAD`, `refs/stage` and
    /// `refs/notes/commit`.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            RefKind::SpecialHead
                | RefKind::SpecialMergeHead
                | RefKind::SpecialStage
                | RefKind::SpecialCommitNote
        )
    }

    /// Returns `true` for the two kinds that carry a scope path and a leaf.
    pub fn is_hierarchical(self) -> bool {
        matches!(self, RefKind::Branch | RefKind::Tag)
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
