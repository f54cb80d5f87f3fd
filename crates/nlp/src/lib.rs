//! Text processing for the ordering chat agent
//!
//! Leaf components with no dependencies on the rest of the workspace:
//! - Token normalization (lowercasing, punctuation stripping, stop-words)
//! - Jaccard set-overlap similarity
//! - Sentence segmentation for compound utterances
//! - Menu-item (dish) extraction by longest literal match

pub mod dishes;
pub mod normalize;
pub mod segment;
pub mod similarity;

pub use dishes::{extract_dish, title_case, DISH_CATALOG};
pub use normalize::normalize;
pub use segment::split_sentences;
pub use similarity::jaccard;
