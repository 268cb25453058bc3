//! Skill Match Scorer — 0–100 score from set overlap between normalized
//! résumé skills and JD skills, with exact and fuzzy (word-overlap) matching
//! plus a capped bonus for extra résumé skills.

use serde::Serialize;

use crate::scoring::taxonomy::SkillTaxonomy;

/// Score returned when the JD yields no skill requirements at all.
pub const NO_REQUIREMENTS_SCORE: f64 = 70.0;

/// Bonus points per résumé skill not required by the JD, and the cap.
const EXTRA_SKILL_BONUS: f64 = 2.0;
const EXTRA_SKILL_BONUS_CAP: f64 = 15.0;

/// Minimum share of the JD skill's words that must appear in the résumé
/// skill's words to count as a fuzzy match. Intentionally normalized by the
/// JD side — "AWS" on a résumé fully covers a JD asking for "AWS", but not
/// one asking for "AWS Cloud Infrastructure".
const FUZZY_OVERLAP_THRESHOLD: f64 = 0.5;

/// Outcome of matching one résumé skill list against one JD skill list.
///
/// `matching` and `missing` partition the normalized JD skill list: every
/// required skill appears in exactly one of the two, in JD order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
    pub skill_score: f64,
}

/// Scores résumé skills against JD skills.
///
/// Both lists are normalized (and de-duplicated) first. If the JD list is
/// empty after normalization there is nothing to miss: the result is the
/// fixed `NO_REQUIREMENTS_SCORE` with every résumé skill in `matching`.
pub fn score_skills(
    resume_skills: &[String],
    jd_skills: &[String],
    taxonomy: &SkillTaxonomy,
) -> MatchResult {
    let resume = taxonomy.normalize_all(resume_skills);
    let jd = taxonomy.normalize_all(jd_skills);

    if jd.is_empty() {
        return MatchResult {
            matching: resume,
            missing: Vec::new(),
            skill_score: NO_REQUIREMENTS_SCORE,
        };
    }

    let mut matching = Vec::new();
    let mut missing = Vec::new();

    for required in &jd {
        let exact = resume.iter().any(|have| have.eq_ignore_ascii_case(required));
        if exact || resume.iter().any(|have| fuzzy_word_match(have, required)) {
            matching.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }

    let base = matching.len() as f64 / jd.len() as f64 * 100.0;

    // Extra relevant skills beyond the JD list earn a small capped bonus.
    let extra = resume
        .iter()
        .filter(|have| !jd.iter().any(|req| req.eq_ignore_ascii_case(have)))
        .count();
    let bonus = (EXTRA_SKILL_BONUS * extra as f64).min(EXTRA_SKILL_BONUS_CAP);

    MatchResult {
        matching,
        missing,
        skill_score: (base + bonus).min(100.0),
    }
}

/// Word-overlap fuzzy match, normalized by the JD skill's word count.
fn fuzzy_word_match(resume_skill: &str, jd_skill: &str) -> bool {
    let resume_words: Vec<String> = resume_skill
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect();
    let jd_words: Vec<String> = jd_skill
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect();
    if jd_words.is_empty() {
        return false;
    }

    let shared = jd_words.iter().filter(|w| resume_words.contains(w)).count();
    shared as f64 / jd_words.len() as f64 >= FUZZY_OVERLAP_THRESHOLD
}
