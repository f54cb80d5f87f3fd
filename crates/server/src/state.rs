//! Application State
//!
//! Shared state across all handlers. The engine is constructed once at
//! startup and injected here; handlers never reach for globals.

use std::sync::Arc;

use ordering_agent_config::Settings;
use ordering_agent_core::IntentCatalog;
use ordering_agent_dialogue::DialogueEngine;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Immutable settings snapshot
    pub config: Arc<Settings>,
    /// The dialogue engine, shared read-only across requests
    pub engine: Arc<DialogueEngine>,
    /// Loaded intent catalog, exposed by the diagnostics endpoint
    pub catalog: Arc<IntentCatalog>,
}

impl AppState {
    pub fn new(config: Settings, engine: DialogueEngine, catalog: Arc<IntentCatalog>) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            catalog,
        }
    }
}
