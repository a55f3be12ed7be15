use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use triage_core::config::{flag_from_env_value, language_from_env_value};
use triage_core::constants::DEFAULT_REST_ADDR;
use triage_core::{ConversationService, ConversationStore, CoreConfig, MemoryStore};

/// Main entry point for the triage service
///
/// Resolves configuration from the environment once, builds the conversation store and
/// service, and serves the REST API (with OpenAPI/Swagger UI) until Ctrl-C.
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TRIAGE_DEFAULT_LANGUAGE`: language for conversations started without one (default: "en")
/// - `TRIAGE_FOLLOW_UP_QUESTIONS`: ask category follow-up questions (default: "true")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - a configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("triage_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let default_language =
        language_from_env_value(std::env::var("TRIAGE_DEFAULT_LANGUAGE").ok())?;
    let follow_up_questions =
        flag_from_env_value(std::env::var("TRIAGE_FOLLOW_UP_QUESTIONS").ok(), true)?;

    let cfg = Arc::new(CoreConfig::new(default_language, follow_up_questions));
    let store: Arc<dyn ConversationStore> = Arc::new(MemoryStore::new());
    let conversations = ConversationService::new(store, cfg);

    let app = router(AppState::new(conversations));

    tracing::info!(
        default_language = %default_language,
        follow_up_questions,
        "++ Starting triage REST on {}",
        rest_addr
    );

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Triage REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
