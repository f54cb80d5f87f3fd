//! Configuration management for the ordering chat agent
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`ORDERING_AGENT__` prefix, `__` separator)
//!
//! The intent catalog (`config/intents.json`) is loaded separately through
//! [`load_intent_catalog`]; a missing or malformed catalog is a fatal
//! startup error, never a per-request one.

pub mod catalog;
pub mod settings;

pub use catalog::load_intent_catalog;
pub use settings::{
    load_settings, CatalogConfig, ObservabilityConfig, RecipeApiConfig, RuntimeEnvironment,
    ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
