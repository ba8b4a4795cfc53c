//! Splitting a document into per-topic files.
//!
//! Resource paths are bucketed by their topic, the segment following a fixed
//! routing prefix (`/api/v1/<topic>/...` by default). Paths outside that shape
//! land in a fallback bucket (`_misc`). Components and top-level metadata go to
//! two reserved side-files.
//!
//! # Example
//!
//! ```rust
//! use graduate_core::split::{Sections, extract_topic};
//! use graduate_core::{Document, Layout};
//! use serde_json::json;
//!
//! assert_eq!(extract_topic("/api/v1/account/profile"), Some("account"));
//! assert_eq!(extract_topic("/status"), None);
//!
//! let doc = Document::try_from(json!({
//!     "openapi": "3.1.0",
//!     "paths": {
//!         "/api/v1/account/profile": { "get": {} },
//!         "/status": { "get": {} }
//!     }
//! }))
//! .expect("a mapping");
//!
//! let result = Sections::from(&doc).split(&Layout::default());
//! let names: Vec<_> = result
//!     .fragments
//!     .iter()
//!     .filter(|fragment| !fragment.is_empty())
//!     .map(|fragment| fragment.path.display().to_string())
//!     .collect();
//! assert_eq!(names, ["_topinfo.yaml", "account.yaml", "_misc.yaml"]);
//! ```

mod fragment;
mod sections;
mod topic;

pub use fragment::{Fragment, FragmentKind, SplitResult};
pub use sections::Sections;
pub(crate) use sections::topic_fragments;
pub(crate) use topic::topic_after_prefix;
pub use topic::{extract_topic, group, group_with};
