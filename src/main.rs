//! Wealth Coach HTTP server.
//!
//! Reads configuration from `WEALTH_COACH__*` environment variables. With no
//! database url configured the server runs on in-memory stores.

use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wealth_coach::adapters::http::{api_router, AppState};
use wealth_coach::adapters::postgres::{
    PostgresActivityLedger, PostgresCatalog, PostgresInvestmentLedger, PostgresProfileReader,
};
use wealth_coach::config::{AppConfig, DatabaseConfig};
use wealth_coach::domain::suggestion::SuggestionEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let engine = SuggestionEngine::new(config.suggestion.to_settings()?);
    let state = if config.database.is_configured() {
        postgres_state(&config.database, engine).await?
    } else {
        warn!("No database configured, using in-memory stores");
        AppState::in_memory(engine)
    };

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Wealth Coach listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

async fn postgres_state(
    database: &DatabaseConfig,
    engine: SuggestionEngine,
) -> Result<AppState, Box<dyn Error>> {
    info!(url = %database.redacted_url(), pool_max = database.pool_max, "Connecting to PostgreSQL");
    let pool = PgPoolOptions::new()
        .min_connections(database.pool_min)
        .max_connections(database.pool_max)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(AppState::new(
        Arc::new(PostgresProfileReader::new(pool.clone())),
        Arc::new(PostgresCatalog::new(pool.clone())),
        Arc::new(PostgresActivityLedger::new(pool.clone())),
        Arc::new(PostgresInvestmentLedger::new(pool)),
        engine,
    ))
}
