//! API Routes
//!
//! - `/api/v1/posts`, `/api/v1/post` - Posts stored in the vector index
//! - `/api/health` - Health check
//! - `/`, `/static` - Static file serving (frontend)
//! - anything else - plain-text 404

pub mod health;
pub mod posts;
pub mod static_files;

use axum::{Router, http::StatusCode};
use tower_http::trace::TraceLayer;
use crate::middleware::cors_layer;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
///
/// API routes take precedence over static files; a known path hit with an
/// unsupported method is answered like an unknown path.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(posts::router(state.clone()))
        .merge(health::router());

    let router = Router::new()
        .merge(api_router)
        .merge(static_files::router(&state.server))
        .method_not_allowed_fallback(not_found);

    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}
