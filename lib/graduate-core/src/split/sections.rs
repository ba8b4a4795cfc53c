//! Document regions and their split into fragments.
//!
//! Fragments come out in write order: the components side-file, the
//! top-level metadata side-file, then one topic file per bucket.

use std::path::Path;

use crate::document::{COMPONENTS, PATHS, wrap};
use crate::{Document, Layout, Mapping};

use super::{Fragment, FragmentKind, SplitResult, group_with};

/// The three regions of a document, ready to be split into files.
///
/// In split mode this is the whole document, in diff mode it holds only the
/// additions, see [`Diff`](crate::Diff).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    /// Resource paths, keyed by path string.
    pub paths: Mapping,
    /// Reusable components, keyed by section name.
    pub components: Mapping,
    /// Every other top-level entry.
    pub topinfo: Mapping,
}

impl Sections {
    /// Returns `true` if there is nothing to write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.components.is_empty() && self.topinfo.is_empty()
    }

    /// Splits the sections into fragments named after the layout.
    ///
    /// The components and topinfo side-files always come first, possibly
    /// empty, followed by one fragment per topic bucket.
    #[must_use]
    pub fn split(self, layout: &Layout) -> SplitResult {
        let Self {
            paths,
            components,
            topinfo,
        } = self;
        let here = Path::new("");
        let mut result = SplitResult::default();

        let components = if components.is_empty() {
            components
        } else {
            wrap(COMPONENTS, components)
        };
        result.add_fragment(Fragment::new(
            layout.components_file(here),
            FragmentKind::Components,
            components,
        ));
        result.add_fragment(Fragment::new(
            layout.topinfo_file(here),
            FragmentKind::Topinfo,
            topinfo,
        ));

        for fragment in topic_fragments(&paths, layout) {
            result.add_fragment(fragment);
        }

        result
    }
}

/// One `{"paths": ...}` fragment per topic bucket, in bucket order.
pub(crate) fn topic_fragments(paths: &Mapping, layout: &Layout) -> Vec<Fragment> {
    group_with(paths, layout)
        .into_iter()
        .map(|(bucket, bucket_paths)| {
            Fragment::new(
                layout.topic_file(Path::new(""), &bucket),
                FragmentKind::Topic(bucket),
                wrap(PATHS, bucket_paths),
            )
        })
        .collect()
}

impl From<&Document> for Sections {
    fn from(doc: &Document) -> Self {
        Self {
            paths: doc.paths(),
            components: doc.components(),
            topinfo: doc.topinfo(),
        }
    }
}
