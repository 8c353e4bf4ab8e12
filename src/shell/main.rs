use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use event_organizers::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use event_organizers::shell::config::AppConfig;
use event_organizers::shell::state::AppState;
use event_organizers::shell::{graphql, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // In-memory store for now
    let store = Arc::new(InMemoryDocumentStore::new());
    let state = AppState::new(store, config.orphan_policy);

    let app = http::router(state.clone())
        .merge(graphql::router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    tracing::info!(%addr, orphan_policy = %config.orphan_policy, "listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
