//! The per-batch evaluation pipeline.
//!
//! One batch = one job description + many résumé documents. JD-side work
//! (skill extraction, embedding, corpus retrieval) happens once per batch;
//! each document is then scored independently. Per-document failures are
//! isolated: the result list always pairs every input with either a report
//! or an error reason.

use tracing::{error, warn};

use crate::db;
use crate::extraction::{extract_skills, suggest_job_role, summarize_resume, DocumentKind};
use crate::models::report::NewResumeReport;
use crate::pdf;
use crate::scoring::compose::{
    compose, relevance_from_similarity, ScoreBreakdown, FALLBACK_RELEVANCE,
};
use crate::scoring::experience::{score_experience, ExperienceDetail};
use crate::scoring::similarity::cosine_similarity;
use crate::scoring::skills::score_skills;
use crate::state::AppState;

/// How many similar corpus résumés to surface per batch.
pub const TOP_K_SIMILAR: usize = 5;

/// JD-side context computed once per batch.
pub struct BatchContext {
    pub jd_text: String,
    /// Normalized, de-duplicated JD skill list.
    pub jd_skills: Vec<String>,
    /// None when the embedding service failed — relevance falls back.
    pub jd_embedding: Option<Vec<f32>>,
}

/// Everything we know about one successfully scored document.
#[derive(Debug)]
pub struct DocumentReport {
    pub filename: String,
    pub suggested_job_role: Option<String>,
    pub resume_summary: Option<String>,
    pub skills_present: Vec<String>,
    pub skills_missing: Vec<String>,
    pub experience: ExperienceDetail,
    pub breakdown: ScoreBreakdown,
}

/// One per-document outcome: a report or an error reason, never neither.
#[derive(Debug)]
pub enum DocumentResult {
    Scored(Box<DocumentReport>),
    Failed { filename: String, reason: String },
}

/// Result of a whole batch. `results` has exactly one entry per input
/// document, in input order.
pub struct BatchEvaluation {
    pub matched_resumes: Vec<String>,
    pub results: Vec<DocumentResult>,
}

/// Evaluates every document against the job description.
pub async fn evaluate_batch(
    state: &AppState,
    jd_text: &str,
    documents: Vec<(String, Vec<u8>)>,
) -> BatchEvaluation {
    let ctx = prepare_batch(state, jd_text).await;

    let matched_resumes = match &ctx.jd_embedding {
        Some(embedding) => state
            .corpus
            .search(embedding, TOP_K_SIMILAR)
            .into_iter()
            .map(String::from)
            .collect(),
        None => Vec::new(),
    };

    let mut results = Vec::with_capacity(documents.len());
    for (filename, bytes) in documents {
        results.push(evaluate_document(state, &ctx, filename, &bytes).await);
    }

    BatchEvaluation {
        matched_resumes,
        results,
    }
}

/// Computes the JD-side context: extracted skills and the JD embedding.
/// Both are fail-soft — a dead service leaves an empty skill list or a
/// missing embedding, and scoring degrades accordingly.
pub async fn prepare_batch(state: &AppState, jd_text: &str) -> BatchContext {
    let raw_skills =
        extract_skills(state.llm.as_ref(), jd_text, DocumentKind::JobDescription).await;
    let jd_skills = state.taxonomy.normalize_all(&raw_skills);

    let jd_embedding = match state.embedder.embed(jd_text).await {
        Ok(vector) => Some(vector),
        Err(e) => {
            warn!("JD embedding failed, relevance will use fallback: {e}");
            None
        }
    };

    BatchContext {
        jd_text: jd_text.to_string(),
        jd_skills,
        jd_embedding,
    }
}

/// Scores a single document, isolating every failure to this document.
async fn evaluate_document(
    state: &AppState,
    ctx: &BatchContext,
    filename: String,
    bytes: &[u8],
) -> DocumentResult {
    let resume_text = match pdf::extract_text(bytes) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            return DocumentResult::Failed {
                filename,
                reason: "document contained no extractable text".to_string(),
            }
        }
        Err(e) => {
            warn!("text extraction failed for {filename}: {e:#}");
            return DocumentResult::Failed {
                filename,
                reason: "failed to extract text from document".to_string(),
            };
        }
    };

    let report = score_document(state, ctx, filename, &resume_text).await;
    persist_report(state, &report).await;
    DocumentResult::Scored(Box::new(report))
}

/// The scoring chain for one document with already-extracted text.
async fn score_document(
    state: &AppState,
    ctx: &BatchContext,
    filename: String,
    resume_text: &str,
) -> DocumentReport {
    let resume_skills =
        extract_skills(state.llm.as_ref(), resume_text, DocumentKind::Resume).await;
    let match_result = score_skills(&resume_skills, &ctx.jd_skills, &state.taxonomy);

    // Experience looks at the union of both sides' skills so that held-but-
    // unrequired skills can earn their bonus.
    let mut experience_skills = ctx.jd_skills.clone();
    for skill in state.taxonomy.normalize_all(&resume_skills) {
        if !experience_skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&skill))
        {
            experience_skills.push(skill);
        }
    }
    let (experience_score, experience) =
        score_experience(resume_text, &ctx.jd_text, &experience_skills);

    let resume_embedding = match state.embedder.embed(resume_text).await {
        Ok(vector) => Some(vector),
        Err(e) => {
            warn!("résumé embedding failed for {filename}: {e}");
            None
        }
    };
    let relevance = relevance_for(ctx.jd_embedding.as_deref(), resume_embedding.as_deref());

    let breakdown = compose(
        match_result.skill_score,
        experience_score,
        relevance,
        &state.weights,
    );

    let suggested_job_role = suggest_job_role(state.llm.as_ref(), resume_text).await;
    let resume_summary = summarize_resume(state.llm.as_ref(), resume_text, &ctx.jd_text).await;

    DocumentReport {
        filename,
        suggested_job_role,
        resume_summary,
        skills_present: match_result.matching,
        skills_missing: match_result.missing,
        experience,
        breakdown,
    }
}

/// Relevance from two embeddings; either side missing means the fixed
/// fallback so a dead embedding service cannot zero out the composite.
fn relevance_for(jd_embedding: Option<&[f32]>, resume_embedding: Option<&[f32]>) -> f64 {
    match (jd_embedding, resume_embedding) {
        (Some(jd), Some(resume)) => relevance_from_similarity(cosine_similarity(jd, resume)),
        _ => FALLBACK_RELEVANCE,
    }
}

/// Persists one report. Failure is logged and swallowed — user-facing
/// correctness takes priority over storage durability.
async fn persist_report(state: &AppState, report: &DocumentReport) {
    let row = NewResumeReport {
        filename: report.filename.clone(),
        suggested_job_role: report.suggested_job_role.clone(),
        resume_summary: report.resume_summary.clone(),
        skills_present: report.skills_present.clone(),
        skills_missing: report.skills_missing.clone(),
        skill_score: report.breakdown.skill_score,
        experience_score: report.breakdown.experience_score,
        relevance_score: report.breakdown.relevance_score,
        score_out_of_100: report.breakdown.final_score,
        status: report.breakdown.status.as_str().to_string(),
    };

    if let Err(e) = db::insert_report(&state.db, &row).await {
        error!("failed to persist report for {}: {e}", report.filename);
    }
}
