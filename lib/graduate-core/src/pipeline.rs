//! The split and diff pipelines.
//!
//! Both create the output directory, write the components and topinfo
//! side-files (skipped when empty), then one file per topic.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::loader::Baseline;
use crate::split::Sections;
use crate::writer::{Report, write_fragments};
use crate::{Diff, Document, GraduateError, Layout};

/// Splits the whole document into `outdir`.
///
/// # Errors
///
/// Returns [`GraduateError::IoError`] or [`GraduateError::YamlError`] if the
/// output cannot be written.
pub fn split_document(
    doc: &Document,
    outdir: &Path,
    layout: &Layout,
) -> Result<Report, GraduateError> {
    fs::create_dir_all(outdir)?;

    let report = write_fragments(Sections::from(doc).split(layout), outdir)?;
    info!(
        outdir = %outdir.display(),
        files = report.written.len(),
        "document split"
    );

    Ok(report)
}

/// Splits only what `doc` adds to the baseline stored in `baseline_dir` into
/// `outdir`.
///
/// # Errors
///
/// Returns an error if the baseline side-files are unreadable or the output
/// cannot be written. Unreadable baseline topic files are skipped.
pub fn diff_document(
    doc: &Document,
    baseline_dir: &Path,
    outdir: &Path,
    layout: &Layout,
) -> Result<Report, GraduateError> {
    fs::create_dir_all(outdir)?;

    let baseline = Baseline::load(baseline_dir, layout)?;
    let diff = Diff::compute(doc, &baseline);
    info!(
        baseline = %baseline_dir.display(),
        paths = diff.paths.len(),
        component_sections = diff.components.len(),
        topinfo = diff.topinfo.len(),
        "diff computed"
    );

    let report = write_fragments(Sections::from(diff).split(layout), outdir)?;
    info!(
        outdir = %outdir.display(),
        files = report.written.len(),
        "diff split"
    );

    Ok(report)
}
