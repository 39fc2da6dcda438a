// Vector Posts - text posts stored and searched as embeddings in a vector index

pub mod config;
pub mod models;
pub mod types;
pub mod embeddings;
pub mod vector_store;
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
