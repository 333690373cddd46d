use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use hms::accounts::PgAccountDirectory;
use hms::logging::init_tracing;
use hms::router::init_router;
use hms::state::AppState;
use hms_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use hms_db::init_db_pool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    let server_config = ServerConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    let pool = init_db_pool(&database_config)
        .await
        .context("failed to connect to the account directory")?;

    let state = AppState::new(
        &jwt_config,
        CorsConfig::from_env(),
        Arc::new(PgAccountDirectory::new(pool)),
    );

    let app = init_router(state).context("module bootstrap failed")?;

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "Server running");
    info!("Swagger UI available at http://{addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
