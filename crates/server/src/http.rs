//! HTTP Endpoints
//!
//! REST API for the ordering chat agent.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use ordering_agent_core::{TurnRequest, TurnResult};
use ordering_agent_dialogue::EngineError;

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );
    let timeout = std::time::Duration::from_secs(state.config.server.timeout_seconds);

    Router::new()
        // Chat endpoint
        .route("/chat", post(chat))
        // Catalog diagnostics
        .route("/intents", get(get_intents))
        // Health check
        .route("/health", get(health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    // Wildcard headers cannot be combined with credentials; list what the
    // JSON API actually needs.
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Chat request
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    pending_selection: Option<String>,
    #[serde(default)]
    credential: Option<String>,
}

/// Chat response
#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    intent: String,
    probability: f32,
    all_intents: Vec<String>,
    all_probabilities: Vec<f32>,
    sentences_processed: usize,
    multiple_sentences: bool,
    awaiting_dish_selection: bool,
}

impl From<TurnResult> for ChatResponse {
    fn from(result: TurnResult) -> Self {
        Self {
            response: result.reply,
            intent: result.intent,
            probability: result.confidence,
            all_intents: result.sentence_intents,
            all_probabilities: result.sentence_confidences,
            multiple_sentences: result.sentences_processed > 1,
            sentences_processed: result.sentences_processed,
            awaiting_dish_selection: result.awaiting_dish_selection,
        }
    }
}

/// Chat endpoint
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    let turn = TurnRequest {
        message: request.message.unwrap_or_default(),
        pending_selection: request.pending_selection,
        credential: request.credential,
    };

    match state.engine.respond(&turn).await {
        Ok(result) => Ok(Json(ChatResponse::from(result))),
        Err(EngineError::EmptyMessage) => Err(ServerError::InvalidRequest(
            "Mensagem não fornecida".to_string(),
        )),
    }
}

/// Expose the loaded intent catalog
async fn get_intents(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.as_ref().clone())
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
