//! Per-turn request and result types
//!
//! A turn is a pure function of its request: the ingredient sub-dialogue's
//! state travels in the caller-supplied fields instead of server memory, so
//! any replica can answer any request.

use serde::{Deserialize, Serialize};

/// Classification of a single sub-utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Assigned intent tag
    pub tag: String,
    /// Confidence in [0, 1]
    pub confidence: f32,
}

impl Classification {
    pub fn new(tag: impl Into<String>, confidence: f32) -> Self {
        Self {
            tag: tag.into(),
            confidence,
        }
    }
}

/// One classification request from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TurnRequest {
    /// Raw customer message
    pub message: String,
    /// Dish selection being answered, when the previous turn asked for one
    #[serde(default)]
    pub pending_selection: Option<String>,
    /// Credential for the recipe lookup collaborator
    #[serde(default)]
    pub credential: Option<String>,
}

impl TurnRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// The outcome of one full turn. Created fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TurnResult {
    /// Final composed reply text
    pub reply: String,
    /// Intent of the highest-confidence sub-utterance
    pub intent: String,
    /// Confidence of that sub-utterance, scaled to 0-100 and rounded to 2 decimals
    pub confidence: f32,
    /// Intent per sub-utterance, in sentence order
    pub sentence_intents: Vec<String>,
    /// Confidence per sub-utterance (0-100, 2 decimals), in sentence order
    pub sentence_confidences: Vec<f32>,
    /// Number of sub-utterances processed, always >= 1
    pub sentences_processed: usize,
    /// Whether the caller should send a dish selection next
    pub awaiting_dish_selection: bool,
}

/// Scale a [0, 1] confidence to the reported 0-100 range, 2 decimals.
pub fn scale_confidence(confidence: f32) -> f32 {
    (confidence * 100.0 * 100.0).round() / 100.0
}
