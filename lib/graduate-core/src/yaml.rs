//! YAML support using serde-saphyr.
//!
//! Output keeps the key order of the serialized value and emits non-ASCII
//! text literally, so writing the same document twice yields identical bytes.

use serde::Serialize;
use serde_json::Value;

use crate::Mapping;

/// Error type for YAML serialization operations.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait for serializing types to YAML.
///
/// This trait is implemented for all types that implement [`Serialize`].
///
/// # Example
///
/// ```rust
/// use graduate_core::ToYaml;
/// use serde_json::json;
///
/// let yaml = json!({ "title": "Café", "version": "1.0.0" }).to_yaml()?;
/// assert_eq!(yaml, "title: Café\nversion: 1.0.0\n");
/// # Ok::<(), graduate_core::YamlError>(())
/// ```
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}

/// Parses YAML text into an opaque value.
///
/// Blank text is an empty document and parses to `null`. Documents have no
/// node budget: a large API description or topic file is read whole.
pub(crate) fn parse_value(text: &str) -> Result<Value, String> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let options = serde_saphyr::Options {
        budget: None,
        ..serde_saphyr::Options::default()
    };
    serde_saphyr::from_str_with_options(text, options).map_err(|err| err.to_string())
}

/// Parses YAML text that must hold a mapping; an empty document is an empty
/// mapping.
pub(crate) fn parse_mapping(text: &str) -> Result<Mapping, String> {
    match parse_value(text)? {
        Value::Object(content) => Ok(content),
        Value::Null => Ok(Mapping::new()),
        other => Err(format!("expected a mapping, got {}", kind_of(&other))),
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_serialize_in_input_order() {
        let value = json!({
            "openapi": "3.1.0",
            "info": { "title": "Test API", "version": "1.0.0" },
            "components": {}
        });

        let yaml = value.to_yaml().expect("should serialize to YAML");

        assert_snapshot!(yaml, @r"
        openapi: 3.1.0
        info:
          title: Test API
          version: 1.0.0
        components: {}
        ");
    }

    #[test]
    fn should_keep_unicode_literal() {
        let yaml = json!({ "description": "Données météo ☀" })
            .to_yaml()
            .expect("should serialize to YAML");

        assert!(yaml.contains("Données météo ☀"), "{yaml}");
    }

    #[test]
    fn should_parse_mapping_in_order() {
        let content = parse_mapping("zeta: 1\nalpha:\n  nested: true\n").expect("should parse");

        let keys: Vec<_> = content.keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(content["alpha"], json!({ "nested": true }));
    }

    #[test]
    fn should_parse_blank_as_empty_mapping() {
        assert_eq!(parse_mapping("").expect("should parse"), Mapping::new());
        assert_eq!(parse_mapping("  \n").expect("should parse"), Mapping::new());
    }

    #[test]
    fn should_reject_non_mapping() {
        let error = parse_mapping("- a\n- b\n").expect_err("should fail");

        assert_eq!(error, "expected a mapping, got a sequence");
    }

    #[test]
    fn should_parse_large_mapping() {
        let text: String = (0..100_000)
            .map(|idx| format!("/api/v1/big/item{idx}:\n  get:\n    operationId: item{idx}\n"))
            .collect();

        let content = parse_mapping(&text).expect("should parse a large mapping");

        assert_eq!(content.len(), 100_000);
        assert_eq!(
            content["/api/v1/big/item99999"],
            json!({ "get": { "operationId": "item99999" } })
        );
    }
}
