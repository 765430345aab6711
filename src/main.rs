// src/main.rs
use products_api::{config::Config, database, routes, server::bind_listener, state};

use tracing_subscriber::fmt::init as tracing_init;
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Create database pool
    let db_pool = match database::create_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error=%e, url=%config.database_url, "Failed to connect to the database");
            return;
        }
    };
    tracing::info!(url=%config.database_url, "Connected to the database");

    // Create application state
    let app_state = state::AppState::new(db_pool);
    let app = routes::build_app(app_state, config.body_limit_bytes);

    let Some(listener) = bind_listener(&config).await else {
        tracing::error!(host=%config.host, port=config.port, "No free port to listen on");
        return;
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
