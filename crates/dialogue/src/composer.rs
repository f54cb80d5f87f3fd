//! Response composition
//!
//! Maps a classified sentence (plus extracted dish) to a reply, suppresses
//! repeated greetings inside one turn, and deduplicates near-identical
//! replies across sentences before they are joined.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;

use ordering_agent_core::{IntentCatalog, ReplyPicker};
use ordering_agent_nlp::title_case;

use crate::intents;

/// Reply when a whole turn produced nothing usable.
pub const FALLBACK_REPLY: &str = "Desculpe, não entendi. Pode repetir?";

/// Reply for a sentence whose tag is not in the catalog.
pub const UNRECOGNIZED_REPLY: &str =
    "Desculpe, não entendi muito bem. Pode me falar mais sobre o que você precisa?";

/// Substring markers identifying a greeting-flavored reply already emitted
/// this turn.
const GREETING_MARKERS: &[&str] = &["bem-vindo", "konnichiwa"];

/// A reply is dropped when it shares more than this fraction of its own
/// tokens with an already-kept reply.
const DEDUP_OVERLAP_RATIO: f32 = 0.6;

/// Production reply picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReplyPicker;

impl ReplyPicker for RandomReplyPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Selects reply text for classified sentences.
pub struct ResponseComposer {
    catalog: Arc<IntentCatalog>,
    picker: Arc<dyn ReplyPicker>,
}

impl ResponseComposer {
    pub fn new(catalog: Arc<IntentCatalog>, picker: Arc<dyn ReplyPicker>) -> Self {
        Self { catalog, picker }
    }

    /// Compose the reply for one classified sentence.
    ///
    /// Precedence: purchase with an extracted dish gets the confirmation
    /// template; a repeated greeting is suppressed (`None`); any catalog tag
    /// gets one of its templates; unrecognized tags get the generic reply.
    pub fn compose(
        &self,
        tag: &str,
        dish: Option<&str>,
        already_composed: &[String],
    ) -> Option<String> {
        if tag == intents::PURCHASE {
            if let Some(dish) = dish {
                return Some(format!(
                    "Pedido anotado! Seu(a) {} está sendo preparado(a) pelo nosso sushiman. \
                     Deseja adicionar algo mais? 🍣",
                    title_case(dish)
                ));
            }
        }

        if tag == intents::GREETING && already_greeted(already_composed) {
            return None;
        }

        match self.pick_template(tag) {
            Some(reply) => Some(reply),
            None => Some(UNRECOGNIZED_REPLY.to_string()),
        }
    }

    /// One of the tag's templates, chosen by the injected picker.
    fn pick_template(&self, tag: &str) -> Option<String> {
        let intent = self.catalog.get(tag)?;
        if intent.responses.is_empty() {
            return None;
        }
        let index = self.picker.pick(intent.responses.len());
        intent.responses.get(index).cloned()
    }
}

/// Whether a greeting-flavored reply was already composed this turn.
fn already_greeted(replies: &[String]) -> bool {
    replies.iter().any(|reply| {
        let lowered = reply.to_lowercase();
        GREETING_MARKERS.iter().any(|marker| lowered.contains(marker))
    })
}

/// Drop replies that mostly repeat an already-kept one.
///
/// A reply survives only if, against every kept reply, the shared token
/// count stays at or below 60% of its own token count.
pub fn dedupe(replies: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();

    for reply in replies {
        let tokens: HashSet<&str> = reply.split_whitespace().collect();
        let own_count = reply.split_whitespace().count() as f32;

        let similar = kept.iter().any(|existing| {
            let existing_tokens: HashSet<&str> = existing.split_whitespace().collect();
            let shared = tokens.intersection(&existing_tokens).count() as f32;
            shared > own_count * DEDUP_OVERLAP_RATIO
        });

        if !similar {
            kept.push(reply);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordering_agent_core::{FirstReplyPicker, IntentDefinition};

    fn composer() -> ResponseComposer {
        let catalog = IntentCatalog {
            intents: vec![
                IntentDefinition {
                    tag: "cumprimento".to_string(),
                    patterns: vec!["oi".to_string()],
                    responses: vec![
                        "Olá! Bem-vindo ao Will Japanese Restaurant! 🍣".to_string(),
                        "Konnichiwa! Como posso ajudar?".to_string(),
                    ],
                },
                IntentDefinition {
                    tag: "compra".to_string(),
                    patterns: vec!["quero pedir".to_string()],
                    responses: vec!["Legal! Qual prato você gostaria de pedir?".to_string()],
                },
            ],
        };
        ResponseComposer::new(Arc::new(catalog), Arc::new(FirstReplyPicker))
    }

    #[test]
    fn test_purchase_with_dish_uses_confirmation_template() {
        let composer = composer();
        let reply = composer
            .compose("compra", Some("temaki salmão grelhado"), &[])
            .unwrap();
        assert!(reply.contains("Temaki Salmão Grelhado"));
        assert!(reply.starts_with("Pedido anotado!"));
    }

    #[test]
    fn test_purchase_without_dish_uses_catalog_template() {
        let composer = composer();
        let reply = composer.compose("compra", None, &[]).unwrap();
        assert_eq!(reply, "Legal! Qual prato você gostaria de pedir?");
    }

    #[test]
    fn test_greeting_emitted_once() {
        let composer = composer();
        let first = composer.compose("cumprimento", None, &[]).unwrap();
        assert!(first.to_lowercase().contains("bem-vindo"));

        let second = composer.compose("cumprimento", None, &[first]);
        assert!(second.is_none());
    }

    #[test]
    fn test_unrecognized_tag_gets_generic_reply() {
        let composer = composer();
        let reply = composer.compose("desconhecido", None, &[]).unwrap();
        assert_eq!(reply, UNRECOGNIZED_REPLY);
    }

    #[test]
    fn test_dedupe_drops_mostly_shared_reply() {
        let kept = dedupe(vec![
            "temos vários pratos deliciosos no cardápio hoje".to_string(),
            "temos vários pratos deliciosos no menu hoje".to_string(),
        ]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_dedupe_keeps_distinct_replies() {
        let kept = dedupe(vec![
            "Pedido anotado! Seu prato está sendo preparado.".to_string(),
            "Os preços variam entre R$ 25 e R$ 90.".to_string(),
        ]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_dedupe_empty_input() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
