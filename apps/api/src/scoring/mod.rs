//! The scoring and matching engine: skill-taxonomy normalization, fuzzy skill
//! matching, experience-year extraction, cosine relevance, and the weighted
//! blend that produces the final 0–100 score.
//!
//! Everything in this module is pure and deterministic given its inputs — the
//! external calls (skill extraction, embeddings) happen upstream in the
//! evaluation pipeline, and their failures arrive here only as fallback values.

pub mod compose;
pub mod experience;
pub mod similarity;
pub mod skills;
pub mod taxonomy;
