use axum_helpers::{cors_layer_from_env, create_router, health_router, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        database = %config.mongodb.database,
        "Connecting to MongoDB"
    );
    let mongo_client =
        database::mongodb::connect_with_retry(&config.mongodb, RetryConfig::default()).await?;
    let db = mongo_client.database(&config.mongodb.database);

    let state = AppState::new(config, mongo_client, db);
    state.init_indexes().await?;

    let cors = cors_layer_from_env()?;
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), cors)
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.db.clone()));

    info!(
        "Starting back-office API (shutdown timeout {:?})",
        state.config.shutdown_timeout
    );

    let mongo_client = state.mongo_client.clone();
    serve(
        app,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Back-office API shutdown complete");
    Ok(())
}
