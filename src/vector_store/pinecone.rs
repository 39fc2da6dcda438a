// Pinecone index adapter
// API Reference: https://docs.pinecone.io/reference/api/data-plane
//
// Pod-based indexes live at https://{index}-{project}.svc.{environment}.pinecone.io.
// The project name comes from the controller's whoami action, which is what the
// legacy client's init step does before any data-plane call.

use crate::config::PineconeConfig;
use crate::types::{AppError, AppResult, QueryRequest, QueryResponse, Record, UpsertResponse};
use crate::vector_store::VectorStore;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

const API_KEY_HEADER: &str = "Api-Key";

pub struct PineconeIndex {
    client: Client,
    api_key: String,
    host: String,
}

#[derive(Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [Record],
}

#[derive(Serialize)]
struct DeleteRequest<'a> {
    ids: &'a [String],
}

#[derive(Deserialize)]
struct FetchResponse {
    #[serde(default)]
    vectors: HashMap<String, Record>,
}

#[derive(Deserialize)]
struct WhoAmIResponse {
    project_name: String,
}

impl PineconeIndex {
    /// Client for an index whose data-plane host is already known
    pub fn new(api_key: &str, host: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            host: normalize_host(host),
        }
    }

    /// Resolve the index host (unless configured explicitly) and build the client
    pub async fn connect(config: &PineconeConfig) -> AppResult<Self> {
        if let Some(host) = &config.index_host {
            info!(host = %host, "Using configured Pinecone index host");
            return Ok(Self::new(&config.api_key, host));
        }

        let controller = config
            .controller_url
            .clone()
            .unwrap_or_else(|| controller_url(&config.environment));
        let project = whoami(&Client::new(), &controller, &config.api_key).await?;
        let host = index_host(&config.index_name, &project, &config.environment);

        info!(index = %config.index_name, host = %host, "Resolved Pinecone index host");
        Ok(Self::new(&config.api_key, &host))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(format!("{}{}", self.host, path))
            .header(API_KEY_HEADER, &self.api_key)
    }
}

#[async_trait]
impl VectorStore for PineconeIndex {
    async fn upsert(&self, records: Vec<Record>) -> AppResult<UpsertResponse> {
        let response = self
            .post("/vectors/upsert")
            .json(&UpsertRequest { vectors: &records })
            .send()
            .await;
        let response = check_response("upsert", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::VectorStore(format!("Failed to parse upsert response: {}", e)))
    }

    async fn query(&self, request: &QueryRequest) -> AppResult<QueryResponse> {
        let response = self.post("/query").json(request).send().await;
        let response = check_response("query", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::VectorStore(format!("Failed to parse query response: {}", e)))
    }

    async fn delete(&self, ids: &[String]) -> AppResult<()> {
        let response = self
            .post("/vectors/delete")
            .json(&DeleteRequest { ids })
            .send()
            .await;
        let response = check_response("delete", response).await?;
        debug!(status = %response.status(), "Pinecone delete acknowledged");

        Ok(())
    }

    async fn fetch(&self, ids: &[String]) -> AppResult<Vec<Record>> {
        let params: Vec<(&str, &str)> = ids.iter().map(|id| ("ids", id.as_str())).collect();
        let response = self
            .client
            .get(format!("{}/vectors/fetch", self.host))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await;
        let response = check_response("fetch", response).await?;

        let mut body: FetchResponse = response
            .json()
            .await
            .map_err(|e| AppError::VectorStore(format!("Failed to parse fetch response: {}", e)))?;

        Ok(ids.iter().filter_map(|id| body.vectors.remove(id)).collect())
    }
}

async fn whoami(client: &Client, controller: &str, api_key: &str) -> AppResult<String> {
    let url = format!("{}/actions/whoami", controller.trim_end_matches('/'));
    let response = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .send()
        .await;
    let response = check_response("whoami", response).await?;

    let body: WhoAmIResponse = response
        .json()
        .await
        .map_err(|e| AppError::VectorStore(format!("Failed to parse whoami response: {}", e)))?;

    Ok(body.project_name)
}

async fn check_response(
    operation: &str,
    response: reqwest::Result<Response>,
) -> AppResult<Response> {
    let response = response
        .map_err(|e| AppError::VectorStore(format!("Pinecone {} request failed: {}", operation, e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(AppError::VectorStore(format!(
            "Pinecone {} error ({}): {}",
            operation, status, error_text
        )));
    }

    Ok(response)
}

fn controller_url(environment: &str) -> String {
    format!("https://controller.{}.pinecone.io", environment)
}

fn index_host(index_name: &str, project_name: &str, environment: &str) -> String {
    format!("https://{}-{}.svc.{}.pinecone.io", index_name, project_name, environment)
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}
