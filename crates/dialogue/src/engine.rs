//! The dialogue engine facade
//!
//! Built once at startup and shared read-only by every request; the only
//! cross-turn "state" (the ingredient selection) travels in the request
//! itself, so `respond` is a pure function of its inputs.

use std::sync::Arc;

use ordering_agent_core::{
    scale_confidence, Classification, IntentCatalog, RecipeLookup, ReplyPicker, TurnRequest,
    TurnResult,
};
use ordering_agent_nlp::{extract_dish, split_sentences};

use crate::composer::{dedupe, ResponseComposer, FALLBACK_REPLY};
use crate::ingredients;
use crate::ranker::IntentRanker;
use crate::{intents, EngineError};

/// Classifies messages and composes replies.
pub struct DialogueEngine {
    ranker: IntentRanker,
    composer: ResponseComposer,
    recipes: Arc<dyn RecipeLookup>,
    /// Server-side recipe credential; callers may override per request.
    credential: Option<String>,
}

impl DialogueEngine {
    pub fn new(
        catalog: Arc<IntentCatalog>,
        recipes: Arc<dyn RecipeLookup>,
        picker: Arc<dyn ReplyPicker>,
        credential: Option<String>,
    ) -> Self {
        let ranker = IntentRanker::new(&catalog);
        let composer = ResponseComposer::new(catalog, picker);

        Self {
            ranker,
            composer,
            recipes,
            credential,
        }
    }

    /// Answer one turn.
    ///
    /// A request carrying a pending dish selection bypasses classification
    /// entirely; otherwise the message is segmented and each sentence is
    /// classified and answered. An empty message is the only error.
    pub async fn respond(&self, request: &TurnRequest) -> Result<TurnResult, EngineError> {
        if let Some(selection) = request.pending_selection.as_deref() {
            return Ok(self
                .resolve_selection(selection, request.credential.as_deref())
                .await);
        }

        let message = request.message.trim();
        if message.is_empty() {
            return Err(EngineError::EmptyMessage);
        }

        Ok(self.classify_turn(message))
    }

    /// Normal path: segment, classify, extract, compose, deduplicate.
    fn classify_turn(&self, message: &str) -> TurnResult {
        let sentences = split_sentences(message);

        let mut classifications = Vec::with_capacity(sentences.len());
        let mut dishes = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            classifications.push(self.ranker.classify(sentence));
            dishes.push(extract_dish(sentence));
        }

        // The ingredients intent halts normal processing for the whole turn:
        // the reply is the dish menu and the caller round-trips a selection.
        if classifications
            .iter()
            .any(|c| c.tag == intents::INGREDIENTS)
        {
            let reply = ingredients::menu_reply(self.credential.is_some());
            return turn_result(reply, &classifications, sentences.len(), true);
        }

        let mut replies: Vec<String> = Vec::new();
        for (classification, dish) in classifications.iter().zip(&dishes) {
            if let Some(reply) =
                self.composer
                    .compose(&classification.tag, dish.as_deref(), &replies)
            {
                replies.push(reply);
            }
        }

        let kept = dedupe(replies);
        let reply = if kept.is_empty() {
            FALLBACK_REPLY.to_string()
        } else {
            kept.join("\n\n")
        };

        tracing::debug!(
            sentences = sentences.len(),
            replies = kept.len(),
            "Composed turn reply"
        );

        turn_result(reply, &classifications, sentences.len(), false)
    }

    /// Sub-dialogue path: resolve a caller-supplied dish selection.
    async fn resolve_selection(
        &self,
        selection: &str,
        request_credential: Option<&str>,
    ) -> TurnResult {
        let credential = request_credential
            .map(str::to_string)
            .or_else(|| self.credential.clone());

        let Some(credential) = credential else {
            return selection_result(ingredients::MISSING_CREDENTIAL_REPLY.to_string(), true);
        };

        let selected = ingredients::parse_selection(selection);
        if selected.is_empty() {
            return selection_result(ingredients::INVALID_SELECTION_REPLY.to_string(), true);
        }

        let reply = ingredients::resolve(&selected, &credential, self.recipes.as_ref()).await;
        selection_result(reply, false)
    }
}

/// Build the turn result from per-sentence classifications. The reported
/// primary intent is the highest-confidence sentence, first-in-order on ties.
fn turn_result(
    reply: String,
    classifications: &[Classification],
    sentences_processed: usize,
    awaiting_dish_selection: bool,
) -> TurnResult {
    let mut primary = &classifications[0];
    for classification in classifications {
        if classification.confidence > primary.confidence {
            primary = classification;
        }
    }

    TurnResult {
        reply,
        intent: primary.tag.clone(),
        confidence: scale_confidence(primary.confidence),
        sentence_intents: classifications.iter().map(|c| c.tag.clone()).collect(),
        sentence_confidences: classifications
            .iter()
            .map(|c| scale_confidence(c.confidence))
            .collect(),
        sentences_processed,
        awaiting_dish_selection,
    }
}

/// Turn result for the sub-dialogue path, which has no classified sentences.
fn selection_result(reply: String, awaiting: bool) -> TurnResult {
    TurnResult {
        reply,
        intent: intents::INGREDIENTS.to_string(),
        confidence: 100.0,
        sentence_intents: vec![intents::INGREDIENTS.to_string()],
        sentence_confidences: vec![100.0],
        sentences_processed: 1,
        awaiting_dish_selection: awaiting,
    }
}
