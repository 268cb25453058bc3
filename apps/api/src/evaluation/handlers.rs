//! HTTP handler for the evaluation endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::pipeline::{evaluate_batch, DocumentReport, DocumentResult};
use crate::scoring::compose::MatchStatus;
use crate::scoring::experience::ExperienceDetail;
use crate::state::AppState;

/// Response body for `POST /api/v1/evaluations`.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    /// Texts of the most similar corpus résumés, best first. Empty when no
    /// corpus is configured or the JD embedding failed.
    pub matched_resumes: Vec<String>,
    /// One entry per uploaded file, in upload order.
    pub reports: Vec<ReportEntry>,
}

/// Per-file outcome: a full report, or the filename with an error reason.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Scored {
        filename: String,
        suggested_job_role: Option<String>,
        resume_summary: Option<String>,
        skills_present: Vec<String>,
        skills_missing: Vec<String>,
        skill_score: f64,
        experience_score: f64,
        relevance_score: f64,
        score_out_of_100: i32,
        status: MatchStatus,
        experience: ExperienceDetail,
    },
    Failed { filename: String, error: String },
}

impl From<DocumentResult> for ReportEntry {
    fn from(result: DocumentResult) -> Self {
        match result {
            DocumentResult::Scored(report) => {
                let DocumentReport {
                    filename,
                    suggested_job_role,
                    resume_summary,
                    skills_present,
                    skills_missing,
                    experience,
                    breakdown,
                } = *report;
                ReportEntry::Scored {
                    filename,
                    suggested_job_role,
                    resume_summary,
                    skills_present,
                    skills_missing,
                    skill_score: breakdown.skill_score,
                    experience_score: breakdown.experience_score,
                    relevance_score: breakdown.relevance_score,
                    score_out_of_100: breakdown.final_score,
                    status: breakdown.status,
                    experience,
                }
            }
            DocumentResult::Failed { filename, reason } => ReportEntry::Failed {
                filename,
                error: reason,
            },
        }
    }
}

/// `POST /api/v1/evaluations` with multipart form data: one `job_description`
/// text field and one or more `resumes` file fields.
pub async fn evaluate_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluateResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut documents: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job_description field: {e}")))?;
                job_description = Some(text);
            }
            Some("resumes") => {
                let filename = field
                    .file_name()
                    .unwrap_or("resume.pdf")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable upload '{filename}': {e}"))
                })?;
                documents.push((filename, bytes.to_vec()));
            }
            // Unknown fields are ignored rather than rejected.
            _ => {}
        }
    }

    let jd_text = job_description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::Validation("job_description must not be empty".to_string()))?
        .to_string();

    if documents.is_empty() {
        return Err(AppError::Validation(
            "At least one resume file is required".to_string(),
        ));
    }

    info!("evaluating {} resume(s) against one job description", documents.len());
    let batch = evaluate_batch(&state, &jd_text, documents).await;

    Ok(Json(EvaluateResponse {
        matched_resumes: batch.matched_resumes,
        reports: batch.results.into_iter().map(ReportEntry::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compose::ScoreBreakdown;
    use std::collections::BTreeMap;

    #[test]
    fn test_failed_entry_serializes_with_error_field() {
        let entry = ReportEntry::from(DocumentResult::Failed {
            filename: "broken.pdf".to_string(),
            reason: "failed to extract text from document".to_string(),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["filename"], "broken.pdf");
        assert_eq!(json["error"], "failed to extract text from document");
        assert!(json.get("score_out_of_100").is_none());
    }

    #[test]
    fn test_scored_entry_flattens_breakdown() {
        let report = DocumentReport {
            filename: "good.pdf".to_string(),
            suggested_job_role: Some("Data Engineer".to_string()),
            resume_summary: None,
            skills_present: vec!["Python".to_string()],
            skills_missing: vec!["Kubernetes".to_string()],
            experience: ExperienceDetail {
                required: BTreeMap::new(),
                demonstrated: BTreeMap::new(),
            },
            breakdown: ScoreBreakdown {
                skill_score: 80.0,
                experience_score: 70.0,
                relevance_score: 60.0,
                final_score: 72,
                status: MatchStatus::GoodMatch,
            },
        };
        let entry = ReportEntry::from(DocumentResult::Scored(Box::new(report)));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["score_out_of_100"], 72);
        assert_eq!(json["status"], "Good Match");
        assert_eq!(json["skills_missing"][0], "Kubernetes");
        assert_eq!(json["resume_summary"], serde_json::Value::Null);
    }
}
