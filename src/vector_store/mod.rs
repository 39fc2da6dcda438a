//! Vector store abstraction
//!
//! Handlers only talk to [`VectorStore`]; [`pinecone::PineconeIndex`] is the
//! production implementation.

pub mod pinecone;

pub use pinecone::*;

use async_trait::async_trait;
use crate::types::{AppResult, QueryRequest, QueryResponse, Record, UpsertResponse};

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or overwrite records by id
    async fn upsert(&self, records: Vec<Record>) -> AppResult<UpsertResponse>;

    /// Nearest-neighbour search, best match first
    async fn query(&self, request: &QueryRequest) -> AppResult<QueryResponse>;

    async fn delete(&self, ids: &[String]) -> AppResult<()>;

    /// Direct lookup by id; unknown ids are simply absent from the result
    async fn fetch(&self, ids: &[String]) -> AppResult<Vec<Record>>;
}
