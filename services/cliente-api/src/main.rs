//! Cadastro Customer API
//!
//! CRUD HTTP service for customer records keyed by CPF, backed by a single
//! PostgreSQL table with unique CPF and email constraints.

use anyhow::Result;
use axum::{
    http::{header, Method},
    serve, Router,
};
use cadastro_database::{initialize_database, PostgresPool};
use cadastro_utils::{init_logging, AppConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod handlers;
mod middleware;
mod response;
mod routes;

use middleware::request_id_middleware;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Cadastro Customer API");

    // Initialize database
    let db_config = cadastro_database::DatabaseConfig {
        postgres_url: config.database.postgres_url.clone(),
        max_connections: config.database.max_connections,
        connection_timeout: std::time::Duration::from_secs(
            config.database.connection_timeout_seconds,
        ),
    };
    let pool = initialize_database(&db_config).await?;
    info!("Database connection established");

    // Build application router
    let app = create_app(pool, &config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Customer API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

fn create_app(pool: PostgresPool, config: &AppConfig) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(AppState {
            pool,
            config: config.clone(),
        })
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PostgresPool,
    pub config: AppConfig,
}
