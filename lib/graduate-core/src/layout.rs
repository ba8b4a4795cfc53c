//! Output directory layout.

use std::path::{Path, PathBuf};

/// File naming rules shared by the split and diff pipelines and by the
/// baseline loader.
///
/// The default layout writes `_components.yaml`, `_topinfo.yaml`, one
/// `<topic>.yaml` per topic and `_misc.yaml` for paths outside the
/// `/api/v1/<topic>/...` shape.
///
/// # Example
///
/// ```rust
/// use graduate_core::Layout;
///
/// let layout = Layout::default().with_topic_prefix(["api", "v2"]);
///
/// assert_eq!(layout.extract_topic("/api/v2/users/me"), Some("users"));
/// assert_eq!(layout.extract_topic("/api/v1/users/me"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    extension: String,
    reserved_marker: char,
    components_stem: String,
    topinfo_stem: String,
    fallback_bucket: String,
    topic_prefix: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            extension: "yaml".to_string(),
            reserved_marker: '_',
            components_stem: "_components".to_string(),
            topinfo_stem: "_topinfo".to_string(),
            fallback_bucket: "_misc".to_string(),
            topic_prefix: vec!["api".to_string(), "v1".to_string()],
        }
    }
}

impl Layout {
    /// Sets the leading path segments that precede the topic segment.
    #[must_use]
    pub fn with_topic_prefix<S: Into<String>>(
        mut self,
        prefix: impl IntoIterator<Item = S>,
    ) -> Self {
        self.topic_prefix = prefix.into_iter().map(Into::into).collect();
        self
    }

    /// The leading path segments preceding the topic.
    #[must_use]
    pub fn topic_prefix(&self) -> &[String] {
        &self.topic_prefix
    }

    /// Location of the reserved components side-file in `dir`.
    #[must_use]
    pub fn components_file(&self, dir: &Path) -> PathBuf {
        self.file(dir, &self.components_stem)
    }

    /// Location of the reserved top-level metadata side-file in `dir`.
    #[must_use]
    pub fn topinfo_file(&self, dir: &Path) -> PathBuf {
        self.file(dir, &self.topinfo_stem)
    }

    /// Location of a topic file in `dir`.
    #[must_use]
    pub fn topic_file(&self, dir: &Path, bucket: &str) -> PathBuf {
        self.file(dir, bucket)
    }

    /// Returns `true` if `path` names a topic file: the extension matches and
    /// the name does not start with the reserved marker.
    #[must_use]
    pub fn is_topic_file(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext == self.extension.as_str());
        let is_reserved = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| name.starts_with(self.reserved_marker));

        has_extension && !is_reserved
    }

    /// Extracts the topic of a resource path, see [`crate::extract_topic`].
    #[must_use]
    pub fn extract_topic<'a>(&self, path: &'a str) -> Option<&'a str> {
        crate::split::topic_after_prefix(path, &self.topic_prefix)
    }

    /// The bucket of a resource path: its topic, or the fallback bucket.
    #[must_use]
    pub fn bucket_of<'a>(&'a self, path: &'a str) -> &'a str {
        self.extract_topic(path)
            .unwrap_or(self.fallback_bucket.as_str())
    }

    fn file(&self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{stem}.{}", self.extension))
    }
}
