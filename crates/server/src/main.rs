//! Ordering Agent Server Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use ordering_agent_config::{load_intent_catalog, load_settings, Settings};
use ordering_agent_dialogue::{DialogueEngine, RandomReplyPicker};
use ordering_agent_llm::{RecipeClient, RecipeClientConfig};
use ordering_agent_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from files and environment.
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("ORDERING_AGENT_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting Ordering Agent Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    // The intent catalog is required: without it nothing can be classified.
    let catalog = match load_intent_catalog(&config.catalog.intents_path) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!(
                path = %config.catalog.intents_path,
                error = %e,
                "Failed to load intent catalog. \
                 Make sure the intents document exists and is valid."
            );
            std::process::exit(1);
        }
    };

    let recipes = match RecipeClient::new(RecipeClientConfig::from(&config.recipes)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create recipe lookup client");
            std::process::exit(1);
        }
    };

    if config.recipes.api_key.is_none() {
        tracing::warn!(
            "No recipe API credential configured; ingredient lookups will \
             require the caller to supply one"
        );
    }

    let engine = DialogueEngine::new(
        Arc::clone(&catalog),
        recipes,
        Arc::new(RandomReplyPicker),
        config.recipes.api_key.clone(),
    );

    let host: std::net::IpAddr = config.server.host.parse().unwrap_or_else(|_| {
        tracing::warn!(host = %config.server.host, "Invalid host, falling back to 0.0.0.0");
        [0, 0, 0, 0].into()
    });
    let addr = SocketAddr::from((host, config.server.port));

    let state = AppState::new(config, engine, catalog);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing with env-filter and optional JSON output
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("ordering_agent={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
