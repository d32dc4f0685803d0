mod config;
mod http;
mod telemetry;

use std::sync::Arc;

use anyhow::{Context, Result};
use cardgen::routes::RouteTable;
use metrics_exporter_prometheus::PrometheusBuilder;

use self::{config::ServerConfig, http::AppState};

pub async fn serve() -> Result<()> {
  let config = ServerConfig::from_env()?;
  telemetry::init(&config)?;
  let metrics = PrometheusBuilder::new()
    .install_recorder()
    .context("Failed to install Prometheus recorder")?;
  let routes = RouteTable::app().context("Invalid route table")?;
  tracing::info!(
    routes = ?routes.iter().map(|route| route.path).collect::<Vec<_>>(),
    "Client routes registered"
  );
  let app = http::router(AppState {
    routes: Arc::new(routes),
    assets: &http::ASSETS,
    metrics,
  });
  tracing::info!(addr = %config.addr, "Listening");
  axum::Server::try_bind(&config.addr)
    .with_context(|| format!("Failed to bind {}", config.addr))?
    .serve(app.into_make_service())
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  telemetry::shutdown();
  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::error!(%err, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("Shutting down");
}
