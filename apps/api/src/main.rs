mod catalog;
mod config;
mod errors;
mod insights;
mod models;
mod repository;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::repository::supabase::SupabaseRepository;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DiaryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("diary_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Diary API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize remote store client
    let repository = SupabaseRepository::from_config(&config)?;
    info!(
        "Remote store client initialized (table: {})",
        config.diary_table
    );

    // Load the entry collection in the background; reads report `loading` until it lands
    let store = DiaryStore::new(Arc::new(repository));
    store.spawn_initial_load();

    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let revision = *changes.borrow_and_update();
            debug!("Diary collection changed (revision {revision})");
        }
    });

    let state = AppState { store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the mobile client's web build has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
