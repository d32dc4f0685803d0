use std::sync::Arc;

use axum::{
  extract::State,
  http::{StatusCode, Uri},
  response::{IntoResponse, Response},
  routing::get,
  Router, TypedHeader,
};
use headers::{CacheControl, ContentType};
use include_dir::{include_dir, Dir};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use cardgen::routes::RouteTable;

pub static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/dist");

const INDEX_HTML: &str = "index.html";

#[derive(Clone)]
pub struct AppState {
  pub routes: Arc<RouteTable>,
  pub assets: &'static Dir<'static>,
  pub metrics: PrometheusHandle,
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/metrics", get(metrics))
    .fallback(static_or_index)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn metrics(State(state): State<AppState>) -> String {
  state.metrics.render()
}

async fn static_or_index(State(state): State<AppState>, uri: Uri) -> Response {
  let path = uri.path();
  let asset_path = path.trim_start_matches('/');
  if !asset_path.is_empty() {
    if let Some(file) = state.assets.get_file(asset_path) {
      let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
      return (
        TypedHeader(ContentType::from(mime)),
        TypedHeader(CacheControl::new().with_no_cache()),
        file.contents(),
      )
        .into_response();
    }
    if looks_like_file(asset_path) {
      tracing::debug!(path, "Asset not found");
      return StatusCode::NOT_FOUND.into_response();
    }
  }
  // Every other path belongs to the client router. Undeclared paths still get
  // the app shell; the client renders no page for them.
  let route = match state.routes.resolve(path) {
    Some(route) => route.name,
    None => {
      tracing::info!(path, "Serving app shell for undeclared route");
      "unmatched"
    }
  };
  metrics::increment_counter!("cardgen_page_requests_total", "route" => route);
  match state.assets.get_file(INDEX_HTML) {
    Some(index) => (
      TypedHeader(ContentType::html()),
      TypedHeader(CacheControl::new().with_no_cache()),
      index.contents(),
    )
      .into_response(),
    None => {
      tracing::error!("{INDEX_HTML} is missing from embedded assets");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}

fn looks_like_file(path: &str) -> bool {
  path
    .rsplit('/')
    .next()
    .map_or(false, |segment| segment.contains('.'))
}
