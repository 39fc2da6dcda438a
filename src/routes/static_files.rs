//! Static File Serving
//!
//! Serves the built frontend from `FRONTEND_DIR` at `/` and loose assets from
//! `STATIC_DIR` at `/static`. Anything neither directory can answer ends in
//! the plain-text 404.

use axum::{Router, handler::HandlerWithoutStateExt};
use tower_http::services::ServeDir;
use std::path::Path;
use tracing::{info, warn};
use crate::config::ServerConfig;
use super::not_found;

/// Create router for serving static files
pub fn router(server: &ServerConfig) -> Router {
    let frontend = ServeDir::new(checked_dir(&server.frontend_dir))
        .append_index_html_on_directories(true)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    let assets = ServeDir::new(checked_dir(&server.static_dir))
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .nest_service("/static", assets)
        .fallback_service(frontend)
}

fn checked_dir(dir: &str) -> &Path {
    let path = Path::new(dir);
    if path.is_dir() {
        info!(path = %path.display(), "Serving static files");
    } else {
        warn!(path = %path.display(), "Static files directory not found, requests will 404");
    }
    path
}
