//! Persisting fragments as YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::split::{FragmentKind, SplitResult, topic_fragments};
use crate::{GraduateError, Layout, Mapping, ToYaml};

/// Writes `data` as YAML to `path`, replacing any existing file.
///
/// An empty mapping is not written at all, so no empty file is ever created.
/// Returns `true` if a file was written.
///
/// # Errors
///
/// Returns [`GraduateError::YamlError`] if serialization fails and
/// [`GraduateError::IoError`] if the file cannot be written.
pub fn write_yaml(path: &Path, data: &Mapping) -> Result<bool, GraduateError> {
    if data.is_empty() {
        debug!(path = %path.display(), "nothing to write");
        return Ok(false);
    }

    let contents = data.to_yaml().map_err(|err| GraduateError::YamlError {
        error: format!("{err:#?}"),
    })?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), entries = data.len(), "file written");

    Ok(true)
}

/// A file written by [`write_fragments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// What the file holds.
    pub kind: FragmentKind,
    /// Where it was written.
    pub path: PathBuf,
}

/// The outcome of writing a split result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The output directory.
    pub outdir: PathBuf,
    /// Files written, in write order.
    pub written: Vec<Written>,
    /// Fragments left out because they were empty.
    pub skipped: Vec<FragmentKind>,
}

impl Report {
    fn new(outdir: &Path) -> Self {
        Self {
            outdir: outdir.to_path_buf(),
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// The topics that got a file.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.written.iter().filter_map(|written| match &written.kind {
            FragmentKind::Topic(topic) => Some(topic.as_str()),
            _ => None,
        })
    }
}

/// Writes every fragment of `result` under `outdir`, in order.
///
/// `outdir` must exist.
///
/// # Errors
///
/// Stops at the first failing write, see [`write_yaml`]. Files already
/// written are left in place.
pub fn write_fragments(result: SplitResult, outdir: &Path) -> Result<Report, GraduateError> {
    let mut report = Report::new(outdir);

    for fragment in result.fragments {
        let path = outdir.join(&fragment.path);
        if write_yaml(&path, &fragment.content)? {
            report.written.push(Written {
                kind: fragment.kind,
                path,
            });
        } else {
            report.skipped.push(fragment.kind);
        }
    }

    Ok(report)
}

/// Groups `paths` by topic and writes one `{"paths": ...}` file per topic
/// into `outdir`.
///
/// # Errors
///
/// See [`write_yaml`].
pub fn split_and_write(
    paths: &Mapping,
    outdir: &Path,
    layout: &Layout,
) -> Result<Report, GraduateError> {
    let result = SplitResult {
        fragments: topic_fragments(paths, layout),
    };

    write_fragments(result, outdir)
}
