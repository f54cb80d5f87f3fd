//! Similarity-based intent ranking
//!
//! Scores an utterance against every intent's example patterns with the
//! Jaccard index and keeps the best. Patterns are normalized once at
//! construction and reused for every request.

use ordering_agent_core::{Classification, IntentCatalog, UNKNOWN_INTENT};
use ordering_agent_nlp::{jaccard, normalize};

use crate::keywords::keyword_fallback;

/// Below this best-pattern similarity the ranker distrusts itself and
/// delegates to the keyword fallback. Empirically chosen; tunable.
pub const CONFIDENCE_FLOOR: f32 = 0.10;

/// Ranks utterances against the intent catalog.
pub struct IntentRanker {
    /// (tag, normalized pattern token lists), in catalog order
    patterns: Vec<(String, Vec<Vec<String>>)>,
}

impl IntentRanker {
    pub fn new(catalog: &IntentCatalog) -> Self {
        let patterns = catalog
            .intents
            .iter()
            .map(|intent| {
                let normalized = intent.patterns.iter().map(|p| normalize(p)).collect();
                (intent.tag.clone(), normalized)
            })
            .collect();

        Self { patterns }
    }

    /// Classify one sub-utterance.
    ///
    /// The intent's score is its best pattern similarity; ties keep the
    /// first-encountered intent in catalog order. Low-confidence results
    /// are replaced by the keyword fallback, confidence included.
    pub fn classify(&self, utterance: &str) -> Classification {
        let tokens = normalize(utterance);

        let mut best = Classification::new(UNKNOWN_INTENT, 0.0);
        for (tag, pattern_tokens) in &self.patterns {
            let mut max_similarity = 0.0f32;
            for pattern in pattern_tokens {
                let similarity = jaccard(&tokens, pattern);
                if similarity > max_similarity {
                    max_similarity = similarity;
                }
            }

            if max_similarity > best.confidence {
                best = Classification::new(tag.clone(), max_similarity);
            }
        }

        if best.confidence < CONFIDENCE_FLOOR {
            let fallback = keyword_fallback(&utterance.to_lowercase());
            tracing::debug!(
                utterance = %utterance,
                ranked = %best.tag,
                fallback = %fallback.tag,
                "Similarity below floor, using keyword fallback"
            );
            return fallback;
        }

        best
    }
}
