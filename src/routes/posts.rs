//! Posts API
//!
//! Every post is one record in the vector index: the embedding of its text
//! plus the text itself as metadata.

use axum::{
    Router,
    routing::{get, post, put},
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use crate::models::{AppState, MessageResponse, PostRequest, SearchParams};
use crate::types::{AppResult, QueryRequest, Record, ScoredVector, UpsertResponse, SEARCH_TOP_K};
use crate::utils::generate_post_id;
use tracing::{debug, error, info};

pub const POST_CREATED: &str = "Post Created Successfully";
pub const POST_CREATE_FAILED: &str = "failed to create post, please try later";
pub const POST_UPDATED: &str = "Post updated successfully";
pub const POST_UPDATE_FAILED: &str = "failed to update post, please try later";
pub const POST_DELETED: &str = "post deleted successfully";
pub const POST_DELETE_FAILED: &str = "failed to delete story, please try later";

type MessageReply = (StatusCode, Json<MessageResponse>);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/posts", get(list_posts))
        .route("/api/v1/post", post(create_post))
        .route("/api/v1/post/{id}", put(update_post).delete(delete_post))
        .with_state(state)
}

/// GET /api/v1/posts - Similarity search; an empty query returns an arbitrary top 100
///
/// Errors are not caught here and surface as a bare 500 through `AppError`.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ScoredVector>>> {
    let query_text = params.text.unwrap_or_default();

    let vector = state.embeddings.embed(&query_text).await?;
    debug!(dimension = vector.len(), "Query vector created");

    let response = state
        .store
        .query(&QueryRequest::top_k(vector, SEARCH_TOP_K))
        .await?;

    for each_match in &response.matches {
        let metadata = serde_json::to_string(&each_match.metadata).unwrap_or_default();
        info!("score {:.1} => {}", each_match.score, metadata);
    }
    info!("{} records found", response.matches.len());

    Ok(Json(response.matches))
}

/// POST /api/v1/post - Store a new post under a freshly generated id
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<PostRequest>,
) -> MessageReply {
    info!(?request, "Create post request");

    let id = generate_post_id();
    match upsert_post(&state, id, &request.text()).await {
        Ok(response) => {
            info!(upserted = response.upserted_count, "Post created");
            reply(StatusCode::OK, POST_CREATED)
        }
        Err(e) => {
            error!("Failed to create post: {}", e);
            reply(StatusCode::INTERNAL_SERVER_ERROR, POST_CREATE_FAILED)
        }
    }
}

/// PUT /api/v1/post/{id} - Overwrite the post with this id (or create it)
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<PostRequest>,
) -> MessageReply {
    info!(id = %id, "Update post request");

    match upsert_post(&state, id, &request.text()).await {
        Ok(response) => {
            info!(upserted = response.upserted_count, "Post updated");
            reply(StatusCode::OK, POST_UPDATED)
        }
        Err(e) => {
            error!("Failed to update post: {}", e);
            reply(StatusCode::INTERNAL_SERVER_ERROR, POST_UPDATE_FAILED)
        }
    }
}

/// DELETE /api/v1/post/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> MessageReply {
    info!(id = %id, "Delete post request");

    match state.store.delete(&[id]).await {
        Ok(()) => reply(StatusCode::OK, POST_DELETED),
        Err(e) => {
            error!("Failed to delete post: {}", e);
            reply(StatusCode::INTERNAL_SERVER_ERROR, POST_DELETE_FAILED)
        }
    }
}

async fn upsert_post(state: &AppState, id: String, text: &str) -> AppResult<UpsertResponse> {
    let vector = state.embeddings.embed(text).await?;
    debug!(id = %id, dimension = vector.len(), "Post vector created");

    state.store.upsert(vec![Record::new(id, vector, text)]).await
}

fn reply(status: StatusCode, message: &str) -> MessageReply {
    (status, Json(MessageResponse::new(message)))
}
