//! Intent catalog loading
//!
//! The catalog document provides `intents: [{tag, patterns, responses}]` and
//! is read exactly once at process start. Any problem here is fatal: the
//! engine cannot classify without a catalog.

use std::collections::HashSet;
use std::path::Path;

use ordering_agent_core::IntentCatalog;

use crate::ConfigError;

/// Load and validate the intent catalog from `path`.
pub fn load_intent_catalog(path: impl AsRef<Path>) -> Result<IntentCatalog, ConfigError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

    let catalog: IntentCatalog = serde_json::from_str(&raw)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

    validate(&catalog)?;

    tracing::info!(
        path = %path.display(),
        intents = catalog.len(),
        "Loaded intent catalog"
    );

    Ok(catalog)
}

/// Catalog invariants: non-empty, unique tags, every intent has at least one
/// pattern and one response.
fn validate(catalog: &IntentCatalog) -> Result<(), ConfigError> {
    if catalog.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "intents".to_string(),
            message: "Catalog must contain at least one intent".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for intent in &catalog.intents {
        if !seen.insert(intent.tag.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "intents".to_string(),
                message: format!("Duplicate intent tag: {}", intent.tag),
            });
        }

        if intent.patterns.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("intents.{}.patterns", intent.tag),
                message: "Intent must declare at least one pattern".to_string(),
            });
        }

        if intent.responses.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("intents.{}.responses", intent.tag),
                message: "Intent must declare at least one response".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write_catalog(
            r#"{"intents": [{"tag": "compra", "patterns": ["quero pedir"], "responses": ["O que deseja?"]}]}"#,
        );
        let catalog = load_intent_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("compra"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = load_intent_catalog("definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let file = write_catalog("{not json");
        assert!(matches!(
            load_intent_catalog(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let file = write_catalog(r#"{"intents": []}"#);
        assert!(load_intent_catalog(file.path()).is_err());
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let file = write_catalog(
            r#"{"intents": [
                {"tag": "compra", "patterns": ["a"], "responses": ["b"]},
                {"tag": "compra", "patterns": ["c"], "responses": ["d"]}
            ]}"#,
        );
        assert!(load_intent_catalog(file.path()).is_err());
    }

    #[test]
    fn test_intent_without_responses_rejected() {
        let file = write_catalog(
            r#"{"intents": [{"tag": "compra", "patterns": ["a"], "responses": []}]}"#,
        );
        assert!(load_intent_catalog(file.path()).is_err());
    }
}
