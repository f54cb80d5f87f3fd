//! Recipe lookup over the Gemini generateContent API
//!
//! One bounded HTTPS call per dish, no retries. Transport failures, non-2xx
//! statuses and empty payloads surface as [`LookupError`] values that the
//! dialogue engine renders as reply text; a failed lookup is a normal
//! outcome here, never a crash.

pub mod client;

pub use client::{RecipeClient, RecipeClientConfig};
