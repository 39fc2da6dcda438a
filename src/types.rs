// Type definitions shared by the providers and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Embedding model used for every request
pub const EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Output size of `EMBEDDING_MODEL`; the index must be created with this dimension
pub const EMBEDDING_DIMENSION: usize = 1536;

/// Number of neighbours returned by the search endpoint
pub const SEARCH_TOP_K: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub text: String,
}

/// A stored vector with its id and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub values: Vec<f32>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Record {
    pub fn new(id: impl Into<String>, values: Vec<f32>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values,
            metadata: Metadata { text: text.into() },
        }
    }
}

/// One nearest-neighbour match, passed through to clients as returned by the store
///
/// Metadata stays untyped and unknown fields (`sparseValues`, ...) are carried
/// in `extra`, so records written by other clients still come back intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredVector {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub values: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub vector: Vec<f32>,
    pub top_k: u32,
    pub include_values: bool,
    pub include_metadata: bool,
}

impl QueryRequest {
    /// Top-K query returning values and metadata with each match
    pub fn top_k(vector: Vec<f32>, top_k: u32) -> Self {
        Self {
            vector,
            top_k,
            include_values: true,
            include_metadata: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<ScoredVector>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertResponse {
    #[serde(default)]
    pub upserted_count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Embedding API error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// Unhandled route errors get the same bare 500 a framework default would send.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Unhandled request error: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
