mod components;
mod config;
mod db;
mod models;
mod pages;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use config::{AppConfig, StoreConfig};
use store::{MemoryVaultStore, PgVaultStore, VaultStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // A missing .env file is not an error; the process environment still applies.
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env()?;

    let store: Arc<dyn VaultStore> = match &config.store {
        StoreConfig::Postgres { database_url, max_connections } => {
            let pool = db::init_pool(database_url, *max_connections).await?;
            tracing::info!(max_connections, "postgres store ready");
            Arc::new(PgVaultStore::new(pool))
        }
        StoreConfig::Fixture(path) => {
            let store = MemoryVaultStore::from_file(path).await?;
            tracing::warn!(path = %path.display(), "serving in-memory fixture store; changes are not persisted");
            Arc::new(store)
        }
    };

    let state = state::AppState::new(store);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "passkeep listening");
    axum::serve(listener, app).await?;
    Ok(())
}
