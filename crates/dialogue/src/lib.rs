//! Dialogue engine for the ordering chat assistant
//!
//! Turns one customer message into one reply:
//! segmentation -> per-sentence intent ranking (with a keyword fallback) ->
//! dish extraction -> response composition with near-duplicate suppression.
//! The ingredient sub-dialogue is an alternate path driven entirely by
//! caller-supplied state, so the engine itself stays stateless across turns.

pub mod composer;
pub mod engine;
pub mod ingredients;
pub mod keywords;
pub mod ranker;

pub use composer::{RandomReplyPicker, ResponseComposer};
pub use engine::DialogueEngine;
pub use keywords::keyword_fallback;
pub use ranker::IntentRanker;

use thiserror::Error;

/// Intent tags with dedicated handling. Every other tag flows through the
/// generic template path.
pub mod intents {
    pub const GREETING: &str = "cumprimento";
    pub const PURCHASE: &str = "compra";
    pub const INGREDIENTS: &str = "ingredientes";
}

/// Engine errors. Everything past input validation resolves to a reply.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Empty message")]
    EmptyMessage,
}
