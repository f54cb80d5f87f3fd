//! Shared error types.

use thiserror::Error;

/// Errors from the external recipe lookup collaborator.
///
/// These never abort a turn: the dialogue engine renders them as an inline
/// notice inside the affected dish's reply segment.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
