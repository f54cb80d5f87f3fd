//! Core types and traits for the ordering chat agent
//!
//! This crate provides the foundational types shared by all other crates:
//! - Intent catalog types (tags, example patterns, reply templates)
//! - Per-turn request/result types exchanged with the HTTP layer
//! - Traits for pluggable collaborators (recipe lookup, reply selection)
//! - Error types

pub mod error;
pub mod intent;
pub mod traits;
pub mod turn;

pub use error::LookupError;
pub use intent::{IntentCatalog, IntentDefinition};
pub use traits::{FirstReplyPicker, RecipeLookup, ReplyPicker};
pub use turn::{scale_confidence, Classification, TurnRequest, TurnResult};

/// Sentinel tag returned when no intent can be assigned.
pub const UNKNOWN_INTENT: &str = "desconhecido";
