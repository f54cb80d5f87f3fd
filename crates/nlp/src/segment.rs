//! Sentence segmentation for compound utterances
//!
//! Customers routinely chain requests in one message ("Oi, quero um temaki
//! e qual o preço?"). Each fragment is classified independently downstream.

use once_cell::sync::Lazy;
use regex::Regex;

/// Comma directly before a purchase verb starts a new clause. The regex crate
/// has no lookahead, so the comma is rewritten into a terminator and the verb
/// is kept in the following fragment.
static PURCHASE_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*(quero|preciso|gostaria|vou)\b").expect("valid regex"));

/// Clause boundaries: punctuation runs, or the standalone conjunction "e".
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?;]+|\s+e\s+").expect("valid regex"));

/// Split a raw message into trimmed, non-empty fragments.
///
/// Always returns at least one fragment: when splitting leaves nothing, the
/// whole message is treated as a single sentence.
pub fn split_sentences(message: &str) -> Vec<String> {
    let rewritten = PURCHASE_COMMA.replace_all(message, ". $1");

    let fragments: Vec<String> = BOUNDARY
        .split(&rewritten)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect();

    if fragments.is_empty() {
        vec![message.trim().to_string()]
    } else {
        fragments
    }
}
