use async_trait::async_trait;
use crate::types::AppResult;

/// Turns text into a fixed-length vector
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, input: &str) -> AppResult<Vec<f32>>;
}
