//! Intent catalog types
//!
//! The catalog is a static document (`config/intents.json`) loaded once at
//! process start and shared read-only by all requests.

use serde::{Deserialize, Serialize};

/// One conversational intent: a tag, example patterns, and reply templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDefinition {
    /// Unique intent tag (e.g. "compra", "cumprimento")
    pub tag: String,
    /// Example utterances used for similarity ranking
    pub patterns: Vec<String>,
    /// Candidate reply templates
    pub responses: Vec<String>,
}

/// The full ordered intent catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCatalog {
    pub intents: Vec<IntentDefinition>,
}

impl IntentCatalog {
    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&IntentDefinition> {
        self.intents.iter().find(|i| i.tag == tag)
    }

    /// Whether any intent carries this tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Number of intents in catalog order.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Tags in catalog order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(|i| i.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IntentCatalog {
        IntentCatalog {
            intents: vec![
                IntentDefinition {
                    tag: "cumprimento".to_string(),
                    patterns: vec!["oi".to_string(), "bom dia".to_string()],
                    responses: vec!["Olá! Bem-vindo!".to_string()],
                },
                IntentDefinition {
                    tag: "compra".to_string(),
                    patterns: vec!["quero pedir".to_string()],
                    responses: vec!["O que deseja?".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_get_by_tag() {
        let catalog = catalog();
        assert!(catalog.get("compra").is_some());
        assert!(catalog.get("inexistente").is_none());
    }

    #[test]
    fn test_tags_preserve_order() {
        let catalog = catalog();
        let tags: Vec<_> = catalog.tags().collect();
        assert_eq!(tags, vec!["cumprimento", "compra"]);
    }

    #[test]
    fn test_deserialize_catalog_document() {
        let json = r#"{"intents": [{"tag": "precos", "patterns": ["quanto custa"], "responses": ["Veja a tabela."]}]}"#;
        let catalog: IntentCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.intents[0].tag, "precos");
    }
}
