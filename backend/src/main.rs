//! Backend entry-point: wires the registration endpoints and health probes.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use cabcaro_backend::inbound::http::health::HealthState;
use cabcaro_backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;

const DEFAULT_PORT: u16 = 3000;

fn bind_addr_from_env() -> SocketAddr {
    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from(([0, 0, 0, 0], port))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = bind_addr_from_env();
    let mut config = ServerConfig::new(bind_addr);

    // The pool is opened once here and handed to the server; no module holds
    // an ambient connection.
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; falling back to in-memory storage");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting registration server");
    let server = server::create_server(health_state, config)?;
    server.await
}
