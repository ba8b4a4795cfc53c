//! Additive diffs between a new document and a split baseline.
//!
//! Each region has its own rule for what counts as new:
//!
//! - **paths**: a path unknown to the baseline is new as a whole, a known path
//!   contributes only the method keys the baseline lacks;
//! - **components**: an item is new when its name is absent from the same
//!   section of the baseline, payloads are never compared;
//! - **topinfo**: a top-level key is new when the baseline lacks it. A changed
//!   value under an existing key (e.g. a bumped `info.version`) is not a diff.
//!
//! Removals and modifications are never reported.

use std::path::Path;

use serde_json::Value;

use crate::document::{as_mapping, is_region_key};
use crate::loader::{Baseline, load_baseline_paths};
use crate::split::Sections;
use crate::{Document, GraduateError, Layout, Mapping};

/// Computes the paths of `new_paths` missing from the topic files in
/// `baseline_dir`.
///
/// # Errors
///
/// Returns [`GraduateError::IoError`] if the baseline directory cannot be
/// listed. Unreadable topic files are skipped, see [`load_baseline_paths`].
pub fn diff_paths(
    new_paths: &Mapping,
    baseline_dir: &Path,
    layout: &Layout,
) -> Result<Mapping, GraduateError> {
    let baseline_paths = load_baseline_paths(baseline_dir, layout)?;
    Ok(diff_paths_against(new_paths, &baseline_paths))
}

/// Computes the paths of `new_paths` missing from `baseline_paths`, method by
/// method.
///
/// ```rust
/// use graduate_core::diff_paths_against;
/// use serde_json::{Value, json};
///
/// let Value::Object(new) = json!({ "/ping": { "get": {}, "post": {} } }) else { unreachable!() };
/// let Value::Object(baseline) = json!({ "/ping": { "get": {} } }) else { unreachable!() };
///
/// let diff = diff_paths_against(&new, &baseline);
/// assert_eq!(Value::Object(diff), json!({ "/ping": { "post": {} } }));
/// ```
#[must_use]
pub fn diff_paths_against(new_paths: &Mapping, baseline_paths: &Mapping) -> Mapping {
    let mut diff = Mapping::new();

    for (path, item) in new_paths {
        let Some(existing) = baseline_paths.get(path) else {
            diff.insert(path.clone(), item.clone());
            continue;
        };

        let existing = as_mapping(Some(existing));
        let new_methods = missing_entries(&as_mapping(Some(item)), &existing);
        if !new_methods.is_empty() {
            diff.insert(path.clone(), Value::Object(new_methods));
        }
    }

    diff
}

/// Computes, per section, the component items missing from the same section
/// of the baseline.
///
/// Sections without new items are left out.
#[must_use]
pub fn diff_components(new_components: &Mapping, baseline_components: &Mapping) -> Mapping {
    let mut diff = Mapping::new();

    for (section, items) in new_components {
        let base_items = as_mapping(baseline_components.get(section));
        let new_items = missing_entries(&as_mapping(Some(items)), &base_items);
        if !new_items.is_empty() {
            diff.insert(section.clone(), Value::Object(new_items));
        }
    }

    diff
}

/// Computes the top-level entries of `new_document`, other than `paths` and
/// `components`, whose key is absent from the baseline metadata.
///
/// Only key presence counts: the value of an existing key is never compared.
#[must_use]
pub fn diff_topinfo(new_document: &Document, baseline_topinfo: &Mapping) -> Mapping {
    new_document
        .iter()
        .filter(|(key, _)| !is_region_key(key) && !baseline_topinfo.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The additions of a new document relative to a baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    /// New paths and new methods of known paths.
    pub paths: Mapping,
    /// New component items, per section.
    pub components: Mapping,
    /// New top-level entries.
    pub topinfo: Mapping,
}

impl Diff {
    /// Computes the three region diffs of `new_document` against `baseline`.
    #[must_use]
    pub fn compute(new_document: &Document, baseline: &Baseline) -> Self {
        Self {
            paths: diff_paths_against(&new_document.paths(), &baseline.paths),
            components: diff_components(&new_document.components(), &baseline.components),
            topinfo: diff_topinfo(new_document, &baseline.topinfo),
        }
    }

    /// Returns `true` if the new document adds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.components.is_empty() && self.topinfo.is_empty()
    }
}

impl From<Diff> for Sections {
    fn from(diff: Diff) -> Self {
        let Diff {
            paths,
            components,
            topinfo,
        } = diff;
        Self {
            paths,
            components,
            topinfo,
        }
    }
}

fn missing_entries(candidates: &Mapping, existing: &Mapping) -> Mapping {
    candidates
        .iter()
        .filter(|(key, _)| !existing.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
