use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::{COMPONENTS, PATHS, as_mapping};
use crate::yaml::parse_mapping;
use crate::{GraduateError, Layout, Mapping};

/// A document reconstructed from a directory of previously split files.
///
/// Baseline files are only ever read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Baseline {
    /// Paths merged from every topic file.
    pub paths: Mapping,
    /// The `components` region of the components side-file.
    pub components: Mapping,
    /// The content of the top-level metadata side-file.
    pub topinfo: Mapping,
}

impl Baseline {
    /// Reconstructs the baseline stored in `dir`.
    ///
    /// # Errors
    ///
    /// See [`load_baseline_components`], [`load_baseline_topinfo`] and
    /// [`load_baseline_paths`].
    pub fn load(dir: impl AsRef<Path>, layout: &Layout) -> Result<Self, GraduateError> {
        let dir = dir.as_ref();
        let baseline = Self {
            paths: load_baseline_paths(dir, layout)?,
            components: load_baseline_components(dir, layout)?,
            topinfo: load_baseline_topinfo(dir, layout)?,
        };
        debug!(
            dir = %dir.display(),
            paths = baseline.paths.len(),
            components = baseline.components.len(),
            topinfo = baseline.topinfo.len(),
            "baseline loaded"
        );

        Ok(baseline)
    }
}

/// Reads the `components` region of the reserved components side-file.
///
/// A missing file is an empty baseline.
///
/// # Errors
///
/// Returns [`GraduateError::BaselineFileUnreadable`] if the side-file exists
/// but cannot be read or parsed.
pub fn load_baseline_components(dir: &Path, layout: &Layout) -> Result<Mapping, GraduateError> {
    let content = read_optional(&layout.components_file(dir))?.unwrap_or_default();
    Ok(as_mapping(content.get(COMPONENTS)))
}

/// Reads the reserved top-level metadata side-file.
///
/// A missing file is an empty baseline.
///
/// # Errors
///
/// Returns [`GraduateError::BaselineFileUnreadable`] if the side-file exists
/// but cannot be read or parsed.
pub fn load_baseline_topinfo(dir: &Path, layout: &Layout) -> Result<Mapping, GraduateError> {
    Ok(read_optional(&layout.topinfo_file(dir))?.unwrap_or_default())
}

/// Merges the `paths` region of every topic file in `dir`.
///
/// Topic files are visited by file name; when two files define the same path
/// the last one wins. A topic file that cannot be read or parsed is skipped
/// with a warning. A missing directory is an empty baseline.
///
/// # Errors
///
/// Returns [`GraduateError::IoError`] if the directory exists but cannot be
/// listed.
pub fn load_baseline_paths(dir: &Path, layout: &Layout) -> Result<Mapping, GraduateError> {
    let mut paths = Mapping::new();

    for file in topic_files(dir, layout)? {
        match read_optional(&file) {
            Ok(Some(content)) => {
                let topic_paths = as_mapping(content.get(PATHS));
                debug!(file = %file.display(), paths = topic_paths.len(), "baseline topic file");
                paths.extend(topic_paths);
            }
            Ok(None) => {}
            Err(error) => warn!(%error, "skipping baseline file"),
        }
    }

    Ok(paths)
}

fn topic_files(dir: &Path, layout: &Layout) -> Result<Vec<PathBuf>, GraduateError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && layout.is_topic_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn read_optional(path: &Path) -> Result<Option<Mapping>, GraduateError> {
    let unreadable = |error: String| GraduateError::BaselineFileUnreadable {
        path: path.to_path_buf(),
        error,
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(unreadable(err.to_string())),
    };

    parse_mapping(&text).map(Some).map_err(unreadable)
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;
    use serde_json::{Value, json};

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).expect("should write fixture");
    }

    #[test]
    fn should_load_empty_baseline_from_empty_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let baseline = Baseline::load(dir.path(), &Layout::default())?;

        assert_eq!(baseline, Baseline::default());
        Ok(())
    }

    #[test]
    fn should_load_empty_baseline_from_missing_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let baseline = Baseline::load(dir.path().join("missing"), &Layout::default())?;

        assert_eq!(baseline, Baseline::default());
        Ok(())
    }

    #[test]
    fn should_load_side_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write(
            dir.path(),
            "_components.yaml",
            "components:\n  schemas:\n    Pong:\n      type: object\n",
        );
        write(dir.path(), "_topinfo.yaml", "openapi: 3.1.0\ninfo:\n  title: Pets\n");

        let layout = Layout::default();
        let components = load_baseline_components(dir.path(), &layout)?;
        let topinfo = load_baseline_topinfo(dir.path(), &layout)?;

        assert_eq!(
            Value::Object(components),
            json!({ "schemas": { "Pong": { "type": "object" } } })
        );
        assert_eq!(
            Value::Object(topinfo),
            json!({ "openapi": "3.1.0", "info": { "title": "Pets" } })
        );
        Ok(())
    }

    #[test]
    fn should_merge_topic_files_and_ignore_reserved_ones() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path(), "account.yaml", "paths:\n  /api/v1/account/me:\n    get: {}\n");
        write(dir.path(), "status.yaml", "paths:\n  /api/v1/status/ping:\n    get: {}\n");
        write(dir.path(), "_misc.yaml", "paths:\n  /health:\n    get: {}\n");
        write(dir.path(), "notes.txt", "paths:\n  /ignored:\n    get: {}\n");

        let paths = load_baseline_paths(dir.path(), &Layout::default())?;

        assert_eq!(
            Value::Object(paths),
            json!({
                "/api/v1/account/me": { "get": {} },
                "/api/v1/status/ping": { "get": {} }
            })
        );
        Ok(())
    }

    #[test]
    fn should_let_last_topic_file_win() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path(), "a.yaml", "paths:\n  /shared:\n    get: {}\n");
        write(dir.path(), "b.yaml", "paths:\n  /shared:\n    post: {}\n");

        let paths = load_baseline_paths(dir.path(), &Layout::default())?;

        assert_eq!(Value::Object(paths), json!({ "/shared": { "post": {} } }));
        Ok(())
    }

    #[test]
    fn should_skip_unreadable_topic_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path(), "broken.yaml", "paths: [ unterminated\n");
        write(dir.path(), "list.yaml", "- not\n- a mapping\n");
        write(dir.path(), "empty.yaml", "");
        write(dir.path(), "status.yaml", "paths:\n  /api/v1/status/ping:\n    get: {}\n");

        let paths = load_baseline_paths(dir.path(), &Layout::default())?;

        assert_eq!(
            Value::Object(paths),
            json!({ "/api/v1/status/ping": { "get": {} } })
        );
        Ok(())
    }

    #[test]
    fn should_fail_on_unreadable_side_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path(), "_topinfo.yaml", "info: [ unterminated\n");

        let_assert!(
            Err(GraduateError::BaselineFileUnreadable { path, .. }) =
                load_baseline_topinfo(dir.path(), &Layout::default())
        );
        assert!(path.ends_with("_topinfo.yaml"));
        Ok(())
    }
}
