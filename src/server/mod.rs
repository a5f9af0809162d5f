pub mod routes;

use crate::core::cookbook::Cookbook;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

pub use routes::create_router;

/// Builds the cookbook (seeding it if configured) and serves it until Ctrl-C.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let cookbook = Arc::new(Cookbook::new());
    if let Some(seed_file) = config.seed_file() {
        cookbook.load_seed_file(seed_file).await?;
    }

    let app = create_router(cookbook);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🚀 Cookbook listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Cookbook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
