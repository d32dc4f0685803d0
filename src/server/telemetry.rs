use anyhow::{Context, Result};
use opentelemetry_otlp::WithExportConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{LogFormat, ServerConfig};

pub fn init(config: &ServerConfig) -> Result<()> {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
  let fmt_layer = match config.log_format {
    LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
  };
  let otel_layer = match &config.otlp_endpoint {
    Some(endpoint) => {
      let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
          opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(endpoint),
        )
        .install_batch(opentelemetry::runtime::Tokio)
        .context("Failed to install OTLP pipeline")?;
      Some(tracing_opentelemetry::layer().with_tracer(tracer))
    }
    None => None,
  };
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .with(otel_layer)
    .try_init()
    .context("Failed to install tracing subscriber")?;
  Ok(())
}

pub fn shutdown() {
  opentelemetry::global::shutdown_tracer_provider();
}
