//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Recipe lookup API configuration
    #[serde(default)]
    pub recipes: RecipeApiConfig,

    /// Intent catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Recipe lookup API configuration (Gemini generateContent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeApiConfig {
    /// API base endpoint
    #[serde(default = "default_recipe_endpoint")]
    pub endpoint: String,

    /// Generation model name
    #[serde(default = "default_recipe_model")]
    pub model: String,

    /// Server-side credential; callers may also supply one per request
    #[serde(default = "default_api_key")]
    pub api_key: Option<String>,

    /// Per-lookup timeout in seconds
    #[serde(default = "default_recipe_timeout")]
    pub timeout_seconds: u64,

    /// Output-length bound requested from the provider
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Intent catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the intents document
    #[serde(default = "default_intents_path")]
    pub intents_path: String,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON-formatted logs
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}
fn default_recipe_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_recipe_model() -> String {
    "gemini-pro".to_string()
}
fn default_api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}
fn default_recipe_timeout() -> u64 {
    25
}
fn default_max_output_tokens() -> u32 {
    512
}
fn default_temperature() -> f32 {
    0.7
}
fn default_intents_path() -> String {
    "config/intents.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recipe_endpoint(),
            model: default_recipe_model(),
            api_key: default_api_key(),
            timeout_seconds: default_recipe_timeout(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            intents_path: default_intents_path(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.recipes.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recipes.timeout_seconds".to_string(),
                message: "Lookup timeout must be at least 1 second".to_string(),
            });
        }

        if self.recipes.max_output_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recipes.max_output_tokens".to_string(),
                message: "Output bound must be at least 1 token".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.recipes.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "recipes.temperature".to_string(),
                message: format!("Must be between 0.0 and 1.0, got {}", self.recipes.temperature),
            });
        }

        if self.catalog.intents_path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.intents_path".to_string(),
                message: "Intent catalog path cannot be empty".to_string(),
            });
        }

        if self.environment.is_production() && self.server.cors_enabled && self.server.cors_origins.is_empty() {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }
}

/// Load settings with layered sources.
///
/// Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("ORDERING_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
