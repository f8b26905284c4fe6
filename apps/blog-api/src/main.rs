//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;

use blog_api::build_app;
use blog_api::config::AppConfig;
use blog_api::state::AppState;
use blog_api::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_telemetry(&TelemetryConfig::from_env(config.run_mode));

    tracing::info!(
        run_mode = %config.run_mode,
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    // One store shared by every worker
    let state = AppState::in_memory();

    HttpServer::new(move || build_app(state.clone()))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
