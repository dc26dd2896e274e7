//! # flowgated — flowgate daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct application services, injecting the repository via port traits
//! - Build the axum router, injecting services and the valve relay
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use flowgate_adapter_http_axum::router;
use flowgate_adapter_http_axum::state::AppState;
use flowgate_adapter_storage_sqlite_sqlx::SqliteReadingRepository;
use flowgate_app::services::reading_service::ReadingService;
use flowgate_app::services::usage_service::UsageService;
use flowgate_app::valve_relay::ValveRelay;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = flowgate_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let reading_service = ReadingService::new(SqliteReadingRepository::new(pool.clone()));
    let usage_service = UsageService::new(SqliteReadingRepository::new(pool));

    // The operator valve command lives in-process and resets to `close`
    // on every start.
    let valve_relay = ValveRelay::new();

    // HTTP
    let state = AppState::new(reading_service, usage_service, valve_relay);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "flowgated listening");

    axum::serve(listener, app).await?;

    Ok(())
}
