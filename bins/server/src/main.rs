//! Hekto Admin Server
//!
//! Main entry point for the admin dashboard service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hekto_api::{AppState, create_router};
use hekto_core::{AdminCredentials, Shell};
use hekto_shared::AppConfig;
use hekto_store::StoreClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hekto=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create the document-store client
    let store = StoreClient::new(&config.store)?;
    info!(base_url = %config.store.base_url, dataset = %config.store.dataset, "Store client configured");

    // Create application state: one in-memory shell, logged out
    let shell = Shell::new(AdminCredentials::from(&config.admin));
    let state = AppState::new(shell, store);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
