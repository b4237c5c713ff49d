//! Boot sequence: environment, configuration, storage, then the API server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use magicstream_api::ApiServer;
use magicstream_config::AppConfig;
use magicstream_data::CatalogStore;
use magicstream_telemetry::{LogFormat, LoggingConfig, init_logging};

use crate::error::{AppError, AppResult};

const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DB_MAX_CONNECTIONS: u32 = 5;

/// Entry point for the MagicStream application boot sequence.
///
/// # Errors
///
/// Returns an error if configuration loading, database connectivity, or
/// server startup fails.
pub async fn run_app() -> AppResult<()> {
    let dotenv_missing = dotenvy::dotenv().is_err();
    let config =
        magicstream_config::load_from_env().map_err(|err| AppError::config("load", err))?;
    run_app_with(config, dotenv_missing).await
}

/// Boot sequence that relies on an injected configuration to simplify testing.
async fn run_app_with(config: AppConfig, dotenv_missing: bool) -> AppResult<()> {
    init_logging(&LoggingConfig {
        level: &config.log_level,
        format: LogFormat::infer(),
    })
    .map_err(|err| AppError::telemetry("init", err))?;

    if dotenv_missing {
        warn!("unable to find .env file, using process environment only");
    }

    info!("MagicStream application bootstrap starting");

    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(DB_CONNECT_TIMEOUT)
        .connect(&config.database_url)
        .await
        .map_err(|err| AppError::database("pool.connect", err))?;

    let store = CatalogStore::new(pool)
        .await
        .map_err(|err| AppError::data("catalog_store.new", err))?;

    store
        .ping()
        .await
        .map_err(|err| AppError::data("catalog_store.ping", err))?;

    let server = ApiServer::new(Arc::new(store), &config.allowed_origins)
        .map_err(|err| AppError::api_server("api_server.new", err))?;

    server
        .serve(config.listen_addr())
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))
}
