//! Final Score Composer — blends the skill, experience, and relevance
//! sub-scores into one integer score and a status label.

use serde::{Deserialize, Serialize};

/// Relevance substituted when embedding generation fails for either text.
/// Part of the fail-soft contract: one dead dependency must not zero out an
/// otherwise-valid composite score.
pub const FALLBACK_RELEVANCE: f64 = 60.0;

/// Status thresholds, evaluated top-down.
pub const EXCELLENT_THRESHOLD: i32 = 75;
pub const GOOD_THRESHOLD: i32 = 60;
pub const NEEDS_IMPROVEMENT_THRESHOLD: i32 = 40;

/// Blend weights for the three sub-scores. Product policy, not data-derived —
/// kept as an overridable struct rather than scattered literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skill: f64,
    pub experience: f64,
    pub relevance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            experience: 0.4,
            relevance: 0.2,
        }
    }
}

/// Classification of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "Excellent Match")]
    ExcellentMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Poor Match")]
    PoorMatch,
}

impl MatchStatus {
    pub fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            MatchStatus::ExcellentMatch
        } else if score >= GOOD_THRESHOLD {
            MatchStatus::GoodMatch
        } else if score >= NEEDS_IMPROVEMENT_THRESHOLD {
            MatchStatus::NeedsImprovement
        } else {
            MatchStatus::PoorMatch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::ExcellentMatch => "Excellent Match",
            MatchStatus::GoodMatch => "Good Match",
            MatchStatus::NeedsImprovement => "Needs Improvement",
            MatchStatus::PoorMatch => "Poor Match",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full per-document score record. All float sub-scores sit in [0, 100];
/// `final_score` is an integer in [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub relevance_score: f64,
    pub final_score: i32,
    pub status: MatchStatus,
}

/// Converts a raw cosine similarity into a 0–100 relevance score.
pub fn relevance_from_similarity(similarity: f64) -> f64 {
    (similarity * 100.0).clamp(0.0, 100.0)
}

/// Blends the three sub-scores with `weights` into a rounded, clamped final
/// integer score and its status label. Sub-scores are clamped into [0, 100]
/// before blending.
pub fn compose(
    skill_score: f64,
    experience_score: f64,
    relevance_score: f64,
    weights: &ScoreWeights,
) -> ScoreBreakdown {
    let skill_score = skill_score.clamp(0.0, 100.0);
    let experience_score = experience_score.clamp(0.0, 100.0);
    let relevance_score = relevance_score.clamp(0.0, 100.0);

    let blended = weights.skill * skill_score
        + weights.experience * experience_score
        + weights.relevance * relevance_score;
    let final_score = (blended.round() as i32).clamp(0, 100);

    ScoreBreakdown {
        skill_score,
        experience_score,
        relevance_score,
        final_score,
        status: MatchStatus::from_score(final_score),
    }
}
