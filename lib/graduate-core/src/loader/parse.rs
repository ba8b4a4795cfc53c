use serde_json::Value;
use tracing::debug;

use crate::yaml::{kind_of, parse_value};
use crate::{Document, GraduateError};

/// A successfully parsed document, tagged with the format that accepted it.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// The bytes were a JSON mapping.
    Json(Document),
    /// JSON failed, the bytes were a YAML mapping.
    Yaml(Document),
}

impl Parsed {
    /// The name of the format that accepted the bytes.
    #[must_use]
    pub fn format(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Yaml(_) => "yaml",
        }
    }

    /// Returns the parsed document.
    #[must_use]
    pub fn into_document(self) -> Document {
        match self {
            Self::Json(doc) | Self::Yaml(doc) => doc,
        }
    }
}

/// Parses raw bytes as a JSON mapping, then as a YAML mapping.
///
/// YAML being a superset of JSON, the second attempt only matters for
/// documents written in YAML syntax.
///
/// # Errors
///
/// Returns [`GraduateError::ParseFailure`], carrying both failure reasons, if
/// neither attempt yields a mapping.
pub fn parse_document(source_name: &str, bytes: &[u8]) -> Result<Parsed, GraduateError> {
    let json = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => match into_document(value) {
            Ok(doc) => return Ok(Parsed::Json(doc)),
            Err(error) => error,
        },
        Err(err) => err.to_string(),
    };
    debug!(%source_name, %json, "not a JSON document, trying YAML");

    let yaml = match std::str::from_utf8(bytes) {
        Ok(text) => match parse_value(text).and_then(into_document) {
            Ok(doc) => return Ok(Parsed::Yaml(doc)),
            Err(error) => error,
        },
        Err(err) => err.to_string(),
    };

    Err(GraduateError::ParseFailure {
        source_name: source_name.to_string(),
        json,
        yaml,
    })
}

fn into_document(value: Value) -> Result<Document, String> {
    Document::try_from(value).map_err(|other| format!("expected a mapping, got {}", kind_of(&other)))
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_parse_json_first() {
        let bytes = br#"{"openapi": "3.1.0", "paths": {"/status": {"get": {}}}}"#;

        let_assert!(Ok(Parsed::Json(doc)) = parse_document("openapi.json", bytes));
        assert_eq!(doc.paths()["/status"], json!({ "get": {} }));
    }

    #[test]
    fn should_fall_back_to_yaml() {
        let bytes = b"openapi: 3.1.0\ninfo:\n  title: Pets\n  version: '1.0'\n";

        let_assert!(Ok(Parsed::Yaml(doc)) = parse_document("openapi.yaml", bytes));
        assert_eq!(doc.topinfo()["info"], json!({ "title": "Pets", "version": "1.0" }));
    }

    #[test]
    fn should_keep_yaml_key_order() {
        let bytes = b"paths: {}\nopenapi: 3.1.0\ninfo: {}\n";

        let parsed = parse_document("openapi.yaml", bytes).expect("should parse");

        let keys: Vec<_> = parsed.into_document().keys().cloned().collect();
        assert_eq!(keys, ["paths", "openapi", "info"]);
    }

    #[test]
    fn should_fail_when_neither_json_nor_yaml() {
        let bytes = b"{ unbalanced: [ json";

        let_assert!(
            Err(GraduateError::ParseFailure { source_name, json, yaml }) = parse_document("broken", bytes)
        );
        assert_eq!(source_name, "broken");
        assert!(!json.is_empty());
        assert!(!yaml.is_empty());
    }

    #[test]
    fn should_fail_on_non_mapping() {
        let_assert!(Err(GraduateError::ParseFailure { json, yaml, .. }) = parse_document("list", b"[1, 2]"));
        assert_eq!(json, "expected a mapping, got a sequence");
        assert_eq!(yaml, "expected a mapping, got a sequence");
    }

    #[test]
    fn should_fail_on_invalid_utf8() {
        let_assert!(Err(GraduateError::ParseFailure { .. }) = parse_document("binary", &[0xff, 0xfe, 0x00]));
    }
}
