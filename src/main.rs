use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use erudio::application::ports::{ConversationRepository, SessionVerifier};
use erudio::application::services::{ChatService, ConversationStore, ProviderDispatcher};
use erudio::infrastructure::auth::JwtSessionVerifier;
use erudio::infrastructure::llm::LlmBackendFactory;
use erudio::infrastructure::observability::{TracingConfig, init_tracing};
use erudio::infrastructure::persistence::{PgConversationRepository, create_pool, run_migrations};
use erudio::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let pool = create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("Failed to connect to PostgreSQL")?;
    if settings.database.run_migrations {
        run_migrations(&pool).await?;
    }

    let backends = LlmBackendFactory::create_all(&settings.llm);
    if backends.is_empty() {
        tracing::warn!("No usable LLM backends configured; every chat turn will fail");
    }
    let dispatcher = Arc::new(ProviderDispatcher::new(
        backends,
        Duration::from_secs(settings.llm.attempt_timeout_seconds),
    ));
    tracing::info!(backends = ?dispatcher.backend_names(), "LLM dispatch order");

    let conversation_repository: Arc<dyn ConversationRepository> =
        Arc::new(PgConversationRepository::new(pool));
    let session_verifier: Arc<dyn SessionVerifier> = Arc::new(
        JwtSessionVerifier::from_settings(&settings.auth)
            .context("Failed to configure session token verification")?,
    );

    let chat_service = Arc::new(ChatService::new(
        ConversationStore::new(conversation_repository),
        dispatcher,
    ));

    let router = create_router(AppState::new(chat_service, session_verifier));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
