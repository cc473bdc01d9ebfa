//! User service entry-point: ensures the schema, then serves the REST API and
//! its OpenAPI docs.

mod server;

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use user_service::settings::AppSettings;

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_process().map_err(io::Error::other)?;
    let database_url = settings.database_url().map_err(io::Error::other)?;

    // Runs on its own runtime, so it must happen before the actix system starts.
    let applied = ensure_schema(&database_url).map_err(io::Error::other)?;
    info!(applied, "database schema ensured");

    actix_web::rt::System::new().block_on(serve(settings, database_url))
}

async fn serve(settings: AppSettings, database_url: String) -> io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_size()))
        .await
        .map_err(io::Error::other)?;

    let config = ServerConfig::new(settings.bind_addr(), pool);
    let address = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;

    info!(%address, "server listening");
    server.await
}
