//! Fragment types for split documents.

use std::path::PathBuf;

use crate::Mapping;

/// What a fragment holds.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FragmentKind {
    /// The reserved `{"components": ...}` side-file.
    #[display("components")]
    Components,
    /// The reserved top-level metadata side-file.
    #[display("topinfo")]
    Topinfo,
    /// A `{"paths": ...}` file for one topic bucket.
    #[display("topic '{_0}'")]
    Topic(String),
}

/// A piece of a document that should be written to its own file.
///
/// Fragments with empty content are never written, see
/// [`write_yaml`](crate::write_yaml).
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Path of the fragment file, relative to the output directory.
    pub path: PathBuf,

    /// What the fragment holds.
    pub kind: FragmentKind,

    /// The content to serialize into the fragment file.
    pub content: Mapping,
}

impl Fragment {
    /// Creates a new fragment.
    pub fn new(path: impl Into<PathBuf>, kind: FragmentKind, content: Mapping) -> Self {
        Self {
            path: path.into(),
            kind,
            content,
        }
    }

    /// Returns `true` if there is nothing to write for this fragment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The result of splitting a document: the reserved side-files first, then
/// one fragment per topic bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitResult {
    /// Fragments in write order.
    pub fragments: Vec<Fragment>,
}

impl SplitResult {
    /// Adds a fragment to the result.
    pub fn add_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Returns the number of fragments, empty ones included.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if every fragment is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.iter().all(Fragment::is_empty)
    }

    /// Finds the fragment of the given kind.
    #[must_use]
    pub fn get(&self, kind: &FragmentKind) -> Option<&Fragment> {
        self.fragments.iter().find(|fragment| &fragment.kind == kind)
    }
}
