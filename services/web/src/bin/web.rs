//! services/web/src/bin/web.rs

use invitation_core::InvitationService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web_lib::{
    adapters::{FsAssetStore, PgInvitationStore, StorageAccessor},
    config::Config,
    error::ApiError,
    web::{build_router, AppState},
};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to Database & Run Migrations ---
    info!(
        "Connecting to database {} at {}:{}...",
        config.db.name, config.db.host, config.db.port
    );
    let accessor = StorageAccessor::connect(&config.db).await?;
    info!("Running database migrations...");
    accessor.run_migrations().await?;
    info!("Database migrations complete.");

    // --- 3. Initialize Service Adapters ---
    let store = Arc::new(PgInvitationStore::new(accessor));
    let assets = Arc::new(FsAssetStore::new(config.upload_dir.clone()).await?);

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        invitations: InvitationService::new(store, assets),
        upload_dir: config.upload_dir.clone(),
        max_upload_bytes: config.max_upload_bytes,
    });

    // --- 5. Create the Web Router ---
    let app = build_router(app_state);

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
