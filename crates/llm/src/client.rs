//! Gemini generateContent client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use ordering_agent_config::RecipeApiConfig;
use ordering_agent_core::{LookupError, RecipeLookup};

/// Recipe client configuration
#[derive(Debug, Clone)]
pub struct RecipeClientConfig {
    /// API base endpoint
    pub endpoint: String,
    /// Generation model name
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
    /// Output-length bound requested from the provider
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for RecipeClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            timeout: Duration::from_secs(25),
            max_output_tokens: 512,
            temperature: 0.7,
        }
    }
}

impl From<&RecipeApiConfig> for RecipeClientConfig {
    fn from(config: &RecipeApiConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }
}

/// Recipe lookup backed by the Gemini generateContent endpoint.
pub struct RecipeClient {
    client: Client,
    config: RecipeClientConfig,
}

impl RecipeClient {
    /// Create a new client with the configured timeout baked in.
    pub fn new(config: RecipeClientConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                LookupError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Build the generation URL for the configured model.
    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    /// Generation prompt asking for a dish's ingredients.
    fn prompt(dish: &str) -> String {
        format!(
            "Quais são os ingredientes do prato {}? Responda de forma objetiva.",
            dish
        )
    }
}

#[async_trait]
impl RecipeLookup for RecipeClient {
    async fn lookup(&self, dish: &str, credential: &str) -> Result<String, LookupError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(dish),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        tracing::debug!(dish = %dish, "Dispatching recipe lookup");

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", credential)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Network("request timed out".to_string())
                } else {
                    LookupError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Api(format!("HTTP {}: {}", status, body)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        body.first_text().ok_or_else(|| {
            LookupError::InvalidResponse("response contained no text payload".to_string())
        })
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, when the provider returned one.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}
