//! # Blog Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use api_server::config::AppConfig;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppState, configure_app, handlers, state};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog posts API on {}:{}",
        config.host,
        config.port
    );

    // The storage handle lives for the whole server run
    let (app_state, db) = AppState::from_config(config.database.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_app(app_state.clone()))
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    let result = server.await;

    state::shutdown(db).await;
    tracing::info!("Server stopped");

    result
}
