use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::report::NewResumeReport;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Inserts one evaluation report row.
///
/// Callers treat a failure here as non-fatal: the computed result is still
/// returned to the client even when it could not be saved.
pub async fn insert_report(pool: &PgPool, report: &NewResumeReport) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO resume_reports (
            filename, suggested_job_role, resume_summary,
            skills_present, skills_missing,
            skill_score, experience_score, relevance_score,
            score_out_of_100, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(&report.filename)
    .bind(&report.suggested_job_role)
    .bind(&report.resume_summary)
    .bind(&report.skills_present)
    .bind(&report.skills_missing)
    .bind(report.skill_score)
    .bind(report.experience_score)
    .bind(report.relevance_score)
    .bind(report.score_out_of_100)
    .bind(&report.status)
    .execute(pool)
    .await?;

    Ok(())
}
