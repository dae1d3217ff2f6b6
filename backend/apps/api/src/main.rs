//! API Server Entry Point
//!
//! Application entry point and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use api::cleanup::{SESSION_CLEANUP_PERIOD, spawn_session_cleanup};
use api::{AppState, ServerConfig, app_router, cors_layer};
use auth::{AuthAppState, PgAuthRepository};
use axum::http::HeaderValue;
use post::{PgPostRepository, PostAppState};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,post=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(environment = ?config.environment, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());

    // Expired sessions are purged at startup and then hourly
    spawn_session_cleanup(Arc::new(auth_repo.clone()), SESSION_CLEANUP_PERIOD);

    let origin: HeaderValue = config
        .frontend_origin
        .parse()
        .with_context(|| format!("FRONTEND_ORIGIN is not a valid origin: {}", config.frontend_origin))?;

    let state = AppState::new(
        AuthAppState::new(auth_repo, config.auth.clone()),
        PostAppState::new(PgPostRepository::new(pool)),
    );
    let app = app_router(state, cors_layer(origin));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
