use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use vector_posts::{
    config::Config,
    embeddings::OpenAIEmbeddings,
    routes::create_router,
    utils::init_logger,
    vector_store::PineconeIndex,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Providers
    let embeddings = OpenAIEmbeddings::new(&config.openai.api_key, &config.openai.base_url);
    let index = PineconeIndex::connect(&config.pinecone)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialise Pinecone: {}", e))?;

    let state = AppState::new(config.server.clone(), Arc::new(embeddings), Arc::new(index));
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
