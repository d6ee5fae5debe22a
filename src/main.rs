use blogdesk::config::{ServerConfig, run_migrations};
use blogdesk::logging::{init_tracing, shutdown_tracer};
use blogdesk::metrics::{init_metrics, metrics_app};
use blogdesk::router::init_router;
use blogdesk::state::init_app_state;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let metrics_handle = init_metrics()?;

    let state = init_app_state().await;
    run_migrations(&state.db).await?;
    tokio::fs::create_dir_all(&state.upload_config.dir).await?;

    let server_config = ServerConfig::from_env();
    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "🚀 Server running");
    info!("📚 Swagger UI available at http://{}/swagger-ui", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
