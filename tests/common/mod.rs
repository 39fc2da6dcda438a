//! In-memory providers for driving the router without network access.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use http_body_util::BodyExt;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use vector_posts::config::ServerConfig;
use vector_posts::embeddings::EmbeddingProvider;
use vector_posts::types::{
    AppError, AppResult, QueryRequest, QueryResponse, Record, ScoredVector, UpsertResponse,
    EMBEDDING_DIMENSION,
};
use vector_posts::vector_store::VectorStore;
use vector_posts::{create_router, AppState};

/// Bag-of-words embedding: each lowercase word bumps one hashed dimension
#[derive(Default)]
pub struct FakeEmbeddings {
    failing: AtomicBool,
}

impl FakeEmbeddings {
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn vector(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; EMBEDDING_DIMENSION];
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            // FNV-1a
            let hash = word
                .bytes()
                .fold(0xcbf29ce484222325u64, |h, b| (h ^ b as u64).wrapping_mul(0x100000001b3));
            vector[(hash % EMBEDDING_DIMENSION as u64) as usize] += 1.0;
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for FakeEmbeddings {
    async fn embed(&self, input: &str) -> AppResult<Vec<f32>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Embedding("embedding provider unavailable".to_string()));
        }
        Ok(Self::vector(input))
    }
}

/// Cosine-similarity index kept in a map
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, Record>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<Record> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    pub fn insert_text(&self, id: &str, text: &str) {
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), Record::new(id, FakeEmbeddings::vector(text), text));
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::VectorStore("index unavailable".to_string()));
        }
        Ok(())
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn upsert(&self, records: Vec<Record>) -> AppResult<UpsertResponse> {
        self.check()?;
        let mut map = self.records.lock().unwrap();
        let upserted_count = records.len() as u32;
        for record in records {
            map.insert(record.id.clone(), record);
        }
        Ok(UpsertResponse { upserted_count })
    }

    async fn query(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
        self.check()?;
        let map = self.records.lock().unwrap();
        let mut matches: Vec<ScoredVector> = map
            .values()
            .map(|record| ScoredVector {
                id: record.id.clone(),
                score: cosine(&request.vector, &record.values),
                values: if request.include_values { record.values.clone() } else { Vec::new() },
                metadata: request
                    .include_metadata
                    .then(|| serde_json::json!({ "text": record.metadata.text })),
                extra: serde_json::Map::new(),
            })
            .collect();
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(request.top_k as usize);
        Ok(QueryResponse { matches })
    }

    async fn delete(&self, ids: &[String]) -> AppResult<()> {
        self.check()?;
        let mut map = self.records.lock().unwrap();
        for id in ids {
            map.remove(id);
        }
        Ok(())
    }

    async fn fetch(&self, ids: &[String]) -> AppResult<Vec<Record>> {
        self.check()?;
        let map = self.records.lock().unwrap();
        Ok(ids.iter().filter_map(|id| map.get(id).cloned()).collect())
    }
}

pub struct TestApp {
    pub router: Router,
    pub embeddings: Arc<FakeEmbeddings>,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let root = env!("CARGO_MANIFEST_DIR");
        Self::with_server(ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            frontend_dir: format!("{}/tests/fixtures/frontend", root),
            static_dir: format!("{}/tests/fixtures", root),
        })
    }

    pub fn with_server(server: ServerConfig) -> Self {
        let embeddings = Arc::new(FakeEmbeddings::default());
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(server, embeddings.clone(), store.clone());

        Self {
            router: create_router(state),
            embeddings,
            store,
        }
    }
}

// Helper to parse JSON response body
pub async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn text_body(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
