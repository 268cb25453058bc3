use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::corpus::ResumeCorpus;
use crate::embedding::EmbeddingService;
use crate::llm_client::CompletionService;
use crate::scoring::compose::ScoreWeights;
use crate::scoring::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; evaluations share nothing
/// mutable and may run in parallel.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-completion backend for skill extraction, role suggestion, summary.
    pub llm: Arc<dyn CompletionService>,
    /// Embedding backend for the relevance score and corpus retrieval.
    pub embedder: Arc<dyn EmbeddingService>,
    /// Static skill taxonomy — constructed once, never mutated.
    pub taxonomy: Arc<SkillTaxonomy>,
    /// Precomputed résumé-embedding corpus for similar-résumé retrieval.
    pub corpus: Arc<ResumeCorpus>,
    /// Blend weights for the final score.
    pub weights: ScoreWeights,
    pub config: Config,
}
