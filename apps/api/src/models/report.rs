#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted evaluation report, one row per successfully scored document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeReportRow {
    pub id: i32,
    pub filename: String,
    pub suggested_job_role: Option<String>,
    pub resume_summary: Option<String>,
    pub skills_present: Vec<String>,
    pub skills_missing: Vec<String>,
    pub skill_score: f64,
    pub experience_score: f64,
    pub relevance_score: f64,
    pub score_out_of_100: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `resume_reports`. The database assigns id/created_at.
#[derive(Debug, Clone)]
pub struct NewResumeReport {
    pub filename: String,
    pub suggested_job_role: Option<String>,
    pub resume_summary: Option<String>,
    pub skills_present: Vec<String>,
    pub skills_missing: Vec<String>,
    pub skill_score: f64,
    pub experience_score: f64,
    pub relevance_score: f64,
    pub score_out_of_100: i32,
    pub status: String,
}
