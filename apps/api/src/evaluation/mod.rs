//! Batch evaluation: one job description against many uploaded résumés.

pub mod handlers;
pub mod pipeline;
