use std::sync::Arc;
use std::time::Duration;

use actix_web::HttpServer;
use log::{error, info, warn};
use tm_api::{create_app, AppState, HttpSettings};
use tm_core::services::{JwtTokenService, TokenServiceConfig};
use tm_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!("Starting TaskHub API Server ({})", config.environment);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
    }
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let infra = tm_infra::initialize(&config.database).await.map_err(|e| {
        error!("Failed to initialize infrastructure: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;
    info!("Database pool ready: {}", infra.pool.statistics());

    let tokens = Arc::new(JwtTokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
    let state = AppState::new(
        infra.companies.clone(),
        infra.users.clone(),
        infra.tasks.clone(),
        infra.password_hasher.clone(),
        tokens,
    );

    let settings = HttpSettings {
        environment: config.environment,
        cors: config.cors.clone(),
        max_payload_size: config.server.max_payload_size,
        access_log: config.logging.access_log,
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone(), &settings))
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        // SIGINT/SIGTERM are handled by actix; in-flight requests get this long
        .shutdown_timeout(config.server.shutdown_timeout);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    infra.pool.close().await;
    info!("Server stopped");
    Ok(())
}
