//! Service entry-point: loads settings, connects storage and serves the car
//! inventory API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use car_inventory::inbound::http::health::HealthState;
use car_inventory::outbound::persistence::{DbPool, DieselCarRepository};
use car_inventory::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    run()
        .await
        .inspect_err(|err| error!(error = %err, "car inventory API stopped"))
}

async fn run() -> Result<()> {
    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let pool_config = settings.pool_config()?;
    let bind_addr = settings.bind_addr()?;

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to connect to the database")?;
    DieselCarRepository::new(pool.clone())
        .ensure_schema()
        .await
        .wrap_err("failed to prepare the car table")?;
    info!("connected to database");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_db_pool(pool);
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    // Actix drains on SIGINT itself; liveness has to fail for that window.
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested; draining connections");
            health_state.mark_unhealthy();
        }
    });

    info!(%bind_addr, "car inventory API listening");
    server.await.wrap_err("server terminated with an error")?;
    Ok(())
}
