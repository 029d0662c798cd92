//! # Chirp API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware::from_fn, web};
use tracing_actix_web::TracingLogger;

use chirp_core::ports::TokenService;
use chirp_infra::JwtTokenService;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Chirp API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

    let state = web::Data::new(state);
    let token_service = web::Data::new(token_service);

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(observability::echo_request_id))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(token_service.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
