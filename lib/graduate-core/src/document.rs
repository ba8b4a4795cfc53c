//! The in-memory document model.
//!
//! A document is an insertion-ordered mapping with three regions: `paths`,
//! `components`, and every other top-level key (the "top info": `openapi`,
//! `info`, `servers`, `tags`, ...). Payloads are kept opaque as
//! [`serde_json::Value`], only the keys of the regions carry meaning here.

use serde_json::Value;

/// An insertion-ordered string-keyed mapping of opaque values.
///
/// `serde_json` is built with `preserve_order`, so iteration follows the
/// order of the parsed input.
pub type Mapping = serde_json::Map<String, Value>;

/// Key of the paths region.
pub const PATHS: &str = "paths";

/// Key of the reusable components region.
pub const COMPONENTS: &str = "components";

/// An API description document.
///
/// # Example
///
/// ```rust
/// use graduate_core::Document;
/// use serde_json::json;
///
/// let doc = Document::try_from(json!({
///     "openapi": "3.1.0",
///     "paths": { "/api/v1/status/ping": { "get": {} } },
///     "components": { "schemas": { "Pong": {} } }
/// }))
/// .expect("a mapping");
///
/// assert_eq!(doc.paths().len(), 1);
/// assert_eq!(doc.components().len(), 1);
/// assert_eq!(doc.topinfo().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, derive_more::Deref, derive_more::From)]
pub struct Document(Mapping);

impl Document {
    /// Creates a document from its raw mapping.
    #[must_use]
    pub fn new(content: Mapping) -> Self {
        Self(content)
    }

    /// Returns the `paths` region, or an empty mapping if absent or not a mapping.
    #[must_use]
    pub fn paths(&self) -> Mapping {
        self.region(PATHS)
    }

    /// Returns the `components` region, or an empty mapping if absent or not a mapping.
    #[must_use]
    pub fn components(&self) -> Mapping {
        self.region(COMPONENTS)
    }

    /// Returns every top-level entry except `paths` and `components`.
    #[must_use]
    pub fn topinfo(&self) -> Mapping {
        self.0
            .iter()
            .filter(|(key, _)| !is_region_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Consumes the document and returns the underlying mapping.
    #[must_use]
    pub fn into_inner(self) -> Mapping {
        self.0
    }

    fn region(&self, key: &str) -> Mapping {
        as_mapping(self.0.get(key))
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Accepts only JSON objects, giving back any other value.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(content) => Ok(Self(content)),
            other => Err(other),
        }
    }
}

/// Returns `true` for the `paths` and `components` keys.
#[must_use]
pub fn is_region_key(key: &str) -> bool {
    key == PATHS || key == COMPONENTS
}

/// Clones a value as a mapping; anything that is not an object is empty.
pub(crate) fn as_mapping(value: Option<&Value>) -> Mapping {
    match value {
        Some(Value::Object(content)) => content.clone(),
        _ => Mapping::new(),
    }
}

/// Wraps a mapping under a single key, e.g. `{"paths": ...}`.
pub(crate) fn wrap(key: &str, content: Mapping) -> Mapping {
    let mut wrapper = Mapping::new();
    wrapper.insert(key.to_string(), Value::Object(content));
    wrapper
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn petstore() -> Document {
        Document::try_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "Pets", "version": "1.0.0" },
            "paths": {
                "/api/v1/pets/list": { "get": { "operationId": "listPets" } }
            },
            "components": {
                "schemas": { "Pet": { "type": "object" } }
            },
            "tags": [{ "name": "pets" }]
        }))
        .expect("should be a mapping")
    }

    #[test]
    fn should_extract_regions() {
        let doc = petstore();

        assert_eq!(
            Value::Object(doc.paths()),
            json!({ "/api/v1/pets/list": { "get": { "operationId": "listPets" } } })
        );
        assert_eq!(
            Value::Object(doc.components()),
            json!({ "schemas": { "Pet": { "type": "object" } } })
        );
    }

    #[test]
    fn should_keep_topinfo_in_input_order() {
        let doc = petstore();

        let keys: Vec<_> = doc.topinfo().keys().cloned().collect();

        assert_eq!(keys, ["openapi", "info", "tags"]);
    }

    #[test]
    fn should_default_missing_regions_to_empty() {
        let doc = Document::try_from(json!({ "openapi": "3.1.0", "paths": [] }))
            .expect("should be a mapping");

        assert!(doc.paths().is_empty());
        assert!(doc.components().is_empty());
    }

    #[test]
    fn should_reject_non_mapping() {
        let result = Document::try_from(json!(["not", "a", "mapping"]));

        assert_eq!(result, Err(json!(["not", "a", "mapping"])));
    }

    #[test]
    fn should_wrap_under_key() {
        let mut inner = Mapping::new();
        inner.insert("a".to_string(), json!(1));

        assert_eq!(Value::Object(wrap(PATHS, inner)), json!({ "paths": { "a": 1 } }));
    }
}
