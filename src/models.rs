use std::sync::Arc;
use crate::config::ServerConfig;
use crate::embeddings::EmbeddingProvider;
use crate::vector_store::VectorStore;

#[derive(Clone)]
pub struct AppState {
    pub server: ServerConfig,
    pub embeddings: Arc<dyn EmbeddingProvider>,
    pub store: Arc<dyn VectorStore>,
}

impl AppState {
    pub fn new(
        server: ServerConfig,
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Self {
        Self { server, embeddings, store }
    }
}

// API Request/Response types

/// Body of create and update requests
///
/// `text` is not schema-checked: any JSON value is accepted and stringified.
#[derive(Debug, Default, serde::Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

impl PostRequest {
    /// Text to embed and store; absent or null text is treated as empty
    pub fn text(&self) -> String {
        match &self.text {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
