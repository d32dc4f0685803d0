use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
  pub addr: SocketAddr,
  pub log_format: LogFormat,
  pub otlp_endpoint: Option<String>,
}

impl ServerConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let addr = lookup("CARDGEN_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = addr
      .parse()
      .with_context(|| format!("CARDGEN_ADDR is not a socket address: {addr}"))?;
    let log_format = match lookup("CARDGEN_LOG_FORMAT").as_deref() {
      None | Some("") | Some("pretty") => LogFormat::Pretty,
      Some("json") => LogFormat::Json,
      Some(other) => bail!("CARDGEN_LOG_FORMAT must be 'pretty' or 'json', got {other:?}"),
    };
    let otlp_endpoint =
      lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|endpoint| !endpoint.is_empty());
    Ok(ServerConfig {
      addr,
      log_format,
      otlp_endpoint,
    })
  }
}
