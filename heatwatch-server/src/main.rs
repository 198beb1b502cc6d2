//! HTTP front end for heat streak analysis.

mod handlers;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use heatwatch_core::{Config, Tracker};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct AppState {
    tracker: Tracker,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    let tracker = Tracker::from_config(&config).context("Failed to build HTTP client")?;
    let web_data = web::Data::new(AppState { tracker });

    let bind = (config.server.bind_address.clone(), config.server.port);
    info!(address = %bind.0, port = bind.1, "starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(web_data.clone())
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
