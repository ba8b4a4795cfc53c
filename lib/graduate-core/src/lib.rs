//! # Graduate Core
//!
//! Split an OpenAPI document into per-topic files, and compute what a new
//! document adds to a previously split baseline.
//!
//! Split output is a directory of YAML files:
//!
//! - `_components.yaml`: `{"components": ...}`, omitted when empty;
//! - `_topinfo.yaml`: every top-level entry except `paths` and `components`,
//!   omitted when empty;
//! - `<topic>.yaml`: `{"paths": ...}` for paths shaped `/api/v1/<topic>/...`;
//! - `_misc.yaml`: `{"paths": ...}` for every other path.
//!
//! ## Splitting a document
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use graduate_core::{Layout, Source, fetch, split_document};
//!
//! # fn main() -> Result<(), graduate_core::GraduateError> {
//! let source: Source = "https://api.example.com/openapi.json".parse()?;
//! let doc = fetch(&source)?;
//!
//! let report = split_document(&doc, Path::new("graduated"), &Layout::default())?;
//! for written in &report.written {
//!     println!("{} -> {}", written.kind, written.path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Diffing against a baseline
//!
//! The baseline is a directory produced by a previous split. Only additions
//! are reported:
//!
//! - a path missing from the baseline comes whole, a known path only brings
//!   the methods the baseline lacks;
//! - a component item comes when its name is missing from the same section;
//! - a top-level entry comes when its key is missing, whatever its value.
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use graduate_core::{Layout, Source, diff_document, fetch};
//!
//! # fn main() -> Result<(), graduate_core::GraduateError> {
//! let doc = fetch(&"openapi.yaml".parse::<Source>()?)?;
//!
//! let report = diff_document(
//!     &doc,
//!     Path::new("graduated"),
//!     Path::new("incoming"),
//!     &Layout::default(),
//! )?;
//! let topics: Vec<_> = report.topics().collect();
//! # Ok(())
//! # }
//! ```
//!
//! ## Working in memory
//!
//! The grouping and diff rules are plain functions over [`Mapping`]s:
//!
//! ```rust
//! use graduate_core::{diff_components, extract_topic, group};
//! use serde_json::{Value, json};
//!
//! assert_eq!(extract_topic("/api/v1/account/profile"), Some("account"));
//!
//! let Value::Object(paths) = json!({ "/api/v1/account/profile": {}, "/status": {} }) else {
//!     unreachable!()
//! };
//! let buckets = group(&paths);
//! assert_eq!(buckets.keys().collect::<Vec<_>>(), ["account", "_misc"]);
//!
//! let Value::Object(new) = json!({ "schemas": { "Pet": {}, "Owner": {} } }) else { unreachable!() };
//! let Value::Object(baseline) = json!({ "schemas": { "Pet": {} } }) else { unreachable!() };
//! assert_eq!(
//!     Value::Object(diff_components(&new, &baseline)),
//!     json!({ "schemas": { "Owner": {} } })
//! );
//! ```

mod diff;
mod document;
mod error;
mod layout;
mod loader;
mod pipeline;
pub mod split;
mod writer;
mod yaml;

pub use self::diff::{Diff, diff_components, diff_paths, diff_paths_against, diff_topinfo};
pub use self::document::{COMPONENTS, Document, Mapping, PATHS};
pub use self::error::GraduateError;
pub use self::layout::Layout;
pub use self::loader::{
    Baseline, Parsed, Source, fetch, load_baseline_components, load_baseline_paths,
    load_baseline_topinfo, parse_document,
};
pub use self::pipeline::{diff_document, split_document};
pub use self::split::{extract_topic, group};
pub use self::writer::{Report, Written, split_and_write, write_fragments, write_yaml};
pub use self::yaml::{ToYaml, YamlError};
