mod config;
mod corpus;
mod db;
mod embedding;
mod errors;
mod evaluation;
mod extraction;
mod llm_client;
mod models;
mod pdf;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::ResumeCorpus;
use crate::db::create_pool;
use crate::embedding::EmbeddingClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::compose::ScoreWeights;
use crate::scoring::taxonomy::SkillTaxonomy;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Evaluator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM and embedding clients
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let embedder = EmbeddingClient::new(config.openai_api_key.clone())?;
    info!(
        "Embedding client initialized (model: {})",
        embedding::EMBEDDING_MODEL
    );

    // Load the similar-résumé corpus if configured; run without it otherwise.
    let corpus = match &config.corpus_path {
        Some(path) => match ResumeCorpus::load(Path::new(path)) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!("corpus load failed, similar-resume retrieval disabled: {e:#}");
                ResumeCorpus::empty()
            }
        },
        None => {
            info!("CORPUS_PATH not set, similar-resume retrieval disabled");
            ResumeCorpus::empty()
        }
    };

    // Build app state
    let state = AppState {
        db,
        llm: Arc::new(llm),
        embedder: Arc::new(embedder),
        taxonomy: Arc::new(SkillTaxonomy::builtin()),
        corpus: Arc::new(corpus),
        weights: ScoreWeights::default(),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
