//! Main entry point for the backend server.
//!
//! Configures logging and application state, then launches the HTTP server
//! with the health and info endpoints.

use actix_web::{middleware, web, App, HttpServer};
use log::info;

use ee_2048::config::server::ServerConfig;
use ee_2048::server::{handlers, router, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let state = web::Data::new(AppState::default());

    info!(
        "[Server] {} v{} listening on {}:{}",
        state.service.name, state.service.version, config.host, config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(router::config)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
