use actix_web::HttpServer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keyfob_api::{AppConfig, AppMetrics, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize structured logging (filter via RUST_LOG, default "info").
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Refuse to start on incomplete or undecodable secret material.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "configuration is invalid; refusing to start");
            std::process::exit(1);
        }
    };

    // One registry for all workers, so scrapes see whole-process series.
    let metrics = match AppMetrics::new() {
        Ok(metrics) => metrics,
        Err(err) => {
            error!(error = %err, "failed to build the metrics registry");
            std::process::exit(1);
        }
    };

    let host = config.server.host.clone();
    let port = config.server.port;
    info!(%host, port, "starting keyfob-api");

    HttpServer::new(move || create_app(&config, &metrics))
        .bind((host, port))?
        .run()
        .await
}
