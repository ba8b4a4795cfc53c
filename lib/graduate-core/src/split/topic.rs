//! Topic extraction and path grouping.

use indexmap::IndexMap;

use crate::{Layout, Mapping};

/// Extracts the topic of a resource path using the default `api/v1` prefix.
///
/// Leading and trailing empty segments are ignored, so `api/v1/account/` and
/// `/api/v1/account` both yield `account`. Returns `None` when the path has
/// fewer than three segments, does not start with `api`, `v1`, or has an
/// empty third segment.
///
/// ```rust
/// use graduate_core::extract_topic;
///
/// assert_eq!(extract_topic("/api/v1/account/profile"), Some("account"));
/// assert_eq!(extract_topic("/api/v2/x/y"), None);
/// ```
#[must_use]
pub fn extract_topic(path: &str) -> Option<&str> {
    topic_after_prefix(path, &["api", "v1"])
}

pub(crate) fn topic_after_prefix<'a, S: AsRef<str>>(path: &'a str, prefix: &[S]) -> Option<&'a str> {
    let mut segments = path.trim_matches('/').split('/');

    for expected in prefix {
        if segments.next() != Some(expected.as_ref()) {
            return None;
        }
    }

    segments.next().filter(|topic| !topic.is_empty())
}

/// Groups paths by topic with the default [`Layout`].
#[must_use]
pub fn group(paths: &Mapping) -> IndexMap<String, Mapping> {
    group_with(paths, &Layout::default())
}

/// Groups paths by topic, unattributable paths going to the layout's fallback
/// bucket.
///
/// Buckets appear in the order their first path appears in the input, and
/// each bucket keeps the input order of its paths. Definitions are cloned
/// untouched.
#[must_use]
pub fn group_with(paths: &Mapping, layout: &Layout) -> IndexMap<String, Mapping> {
    let mut buckets: IndexMap<String, Mapping> = IndexMap::new();

    for (path, item) in paths {
        buckets
            .entry(layout.bucket_of(path).to_string())
            .or_default()
            .insert(path.clone(), item.clone());
    }

    buckets
}
