//! Experience Extractor and Experience Match Scorer.
//!
//! `extract_years` scans free text with four overlapping regex patterns that
//! tolerate ordering variation between the number, the word "years"/"yrs",
//! and the skill token. The patterns and their trial order are behavioral
//! contract — do not collapse them into one smarter pattern.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Years outside [0, MAX_CREDIBLE_YEARS] are extraction noise and discarded.
pub const MAX_CREDIBLE_YEARS: u32 = 50;

/// Score returned when the JD states no per-skill year requirement.
pub const NO_STATED_REQUIREMENT_SCORE: f64 = 85.0;

/// Bonus points per skill held without a stated requirement, and the cap.
const UNREQUIRED_SKILL_BONUS: f64 = 5.0;
const UNREQUIRED_SKILL_BONUS_CAP: f64 = 20.0;

/// Per-skill requirement and demonstration maps, returned for diagnostics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperienceDetail {
    pub required: BTreeMap<String, u32>,
    pub demonstrated: BTreeMap<String, u32>,
}

/// Estimates years of experience for `skill` mentioned in `text`.
///
/// Patterns are tried in order; within a pattern, each candidate match is
/// checked and out-of-range captures are skipped rather than ending the
/// search. Returns 0 when nothing credible is found — this extractor
/// under-reports rather than guesses.
pub fn extract_years(text: &str, skill: &str) -> u32 {
    let text = text.to_lowercase();
    let skill = regex::escape(&skill.to_lowercase());

    let patterns = [
        // "<N> years of experience in <skill>" and its abbreviations
        format!(
            r"(\d{{1,3}})[+\-\s]*(?:years?|yrs?)\s+(?:of\s+)?(?:experience\s+)?(?:in\s+|with\s+|using\s+)?{skill}"
        ),
        // skill precedes the number, bounded word gap
        format!(r"{skill}\W+(?:\w+\W+){{0,8}}?(\d{{1,3}})[+\-\s]*(?:years?|yrs?)"),
        // number precedes the skill, bounded word gap
        format!(r"(\d{{1,3}})[+\-\s]*(?:years?|yrs?)\W+(?:\w+\W+){{0,8}}?{skill}"),
        // tight adjacency: "<skill>: 4 years", "<skill> - 4yrs"
        format!(r"{skill}[\s\-:]*(\d{{1,3}})[+\-\s]*(?:years?|yrs?)"),
    ];

    for pattern in &patterns {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                debug!("experience pattern failed to compile: {e}");
                continue;
            }
        };
        for caps in re.captures_iter(&text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                if years <= MAX_CREDIBLE_YEARS {
                    return years;
                }
            }
        }
    }

    0
}

/// Compares required vs demonstrated experience across `skills`.
///
/// Requirements come from the JD text, demonstrations from the résumé text,
/// both via `extract_years`. With no stated requirement anywhere the score is
/// the fixed `NO_STATED_REQUIREMENT_SCORE`; otherwise tier scores are
/// averaged and a capped bonus is added for skills held without a requirement.
pub fn score_experience(
    resume_text: &str,
    jd_text: &str,
    skills: &[String],
) -> (f64, ExperienceDetail) {
    let mut required = BTreeMap::new();
    let mut demonstrated = BTreeMap::new();

    for skill in skills {
        let needed = extract_years(jd_text, skill);
        if needed > 0 {
            required.insert(skill.clone(), needed);
        }
        demonstrated.insert(skill.clone(), extract_years(resume_text, skill));
    }

    let detail = ExperienceDetail {
        required: required.clone(),
        demonstrated: demonstrated.clone(),
    };

    if required.is_empty() {
        return (NO_STATED_REQUIREMENT_SCORE, detail);
    }

    let total: f64 = required
        .iter()
        .map(|(skill, &needed)| tier_score(demonstrated.get(skill).copied().unwrap_or(0), needed))
        .sum();
    let average = total / required.len() as f64;

    let unrequired_held = demonstrated
        .iter()
        .filter(|(skill, &years)| years > 0 && !required.contains_key(*skill))
        .count();
    let bonus = (UNREQUIRED_SKILL_BONUS * unrequired_held as f64).min(UNREQUIRED_SKILL_BONUS_CAP);

    ((average + bonus).clamp(0.0, 100.0), detail)
}

/// Tiered comparison of candidate years `c` against required years `r`.
/// Conditions are evaluated in table order.
fn tier_score(candidate: u32, required: u32) -> f64 {
    let c = candidate as f64;
    let r = required as f64;

    if candidate == 0 {
        20.0
    } else if c >= 0.8 * r && c <= 1.5 * r {
        100.0
    } else if c >= 0.6 * r && c < 0.8 * r {
        75.0
    } else if c > 1.5 * r && c <= 2.0 * r {
        85.0
    } else if c < 0.6 * r {
        40.0
    } else {
        // more than double the requirement
        60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_years_before_skill_with_connectors() {
        assert_eq!(extract_years("5 years of Python experience", "Python"), 5);
        assert_eq!(extract_years("3 years experience in Docker", "Docker"), 3);
        assert_eq!(extract_years("7 yrs with Kubernetes", "Kubernetes"), 7);
    }

    #[test]
    fn test_skill_before_years() {
        assert_eq!(extract_years("Python 3+ years required", "Python"), 3);
        assert_eq!(
            extract_years("strong React background spanning 4 years", "React"),
            4
        );
    }

    #[test]
    fn test_years_then_skill_with_gap() {
        assert_eq!(
            extract_years("at least 6 years working on large Java services", "Java"),
            6
        );
    }

    #[test]
    fn test_tight_adjacency() {
        assert_eq!(extract_years("Rust: 4 years", "Rust"), 4);
        assert_eq!(extract_years("Go - 2yrs", "Go"), 2);
    }

    #[test]
    fn test_case_insensitive_and_escaped_skill() {
        assert_eq!(extract_years("5 YEARS OF PYTHON", "python"), 5);
        assert_eq!(extract_years("C++ 10 years", "C++"), 10);
    }

    #[test]
    fn test_no_pattern_returns_zero() {
        assert_eq!(extract_years("expert in Python", "Python"), 0);
        assert_eq!(extract_years("", "Python"), 0);
        assert_eq!(extract_years("5 years of Java", "Python"), 0);
    }

    #[test]
    fn test_out_of_range_years_rejected() {
        assert_eq!(extract_years("100 years of COBOL", "COBOL"), 0);
        // A later credible match is still found after a noisy one.
        assert_eq!(
            extract_years(
                "999 years of Python, realistically 6 years of Python",
                "Python"
            ),
            6
        );
    }

    #[test]
    fn test_extracted_years_always_in_range() {
        for text in [
            "5 years of Python",
            "Python 3+ years",
            "1000 years of Python",
            "no numbers here",
        ] {
            let years = extract_years(text, "Python");
            assert!(years <= MAX_CREDIBLE_YEARS);
        }
    }

    #[test]
    fn test_no_requirements_returns_default_score() {
        let (score, detail) = score_experience(
            "5 years of Python experience",
            "We want a Python developer.",
            &skills(&["Python"]),
        );
        assert_eq!(score, NO_STATED_REQUIREMENT_SCORE);
        assert!(detail.required.is_empty());
        assert_eq!(detail.demonstrated.get("Python"), Some(&5));
    }

    #[test]
    fn test_tier_table() {
        assert_eq!(tier_score(0, 5), 20.0);
        assert_eq!(tier_score(5, 5), 100.0); // within [0.8r, 1.5r]
        assert_eq!(tier_score(4, 5), 100.0); // exactly 0.8r
        assert_eq!(tier_score(3, 5), 75.0); // [0.6r, 0.8r)
        assert_eq!(tier_score(8, 5), 85.0); // (1.5r, 2r]
        assert_eq!(tier_score(2, 5), 40.0); // < 0.6r
        assert_eq!(tier_score(11, 5), 60.0); // > 2r
    }

    #[test]
    fn test_overshoot_tier_scenario() {
        // JD requires Python 3+ years, résumé shows 5: 5 > 1.5*3 but <= 2*3.
        let (score, detail) = score_experience(
            "I have 5 years of Python experience.",
            "Python 3+ years required.",
            &skills(&["Python"]),
        );
        assert_eq!(detail.required.get("Python"), Some(&3));
        assert_eq!(detail.demonstrated.get("Python"), Some(&5));
        assert_eq!(score, 85.0);
    }

    #[test]
    fn test_unrequired_skill_bonus_capped() {
        let resume = "4 years of Python. Docker: 2 years. Redis: 3 years. \
                      Git: 1 year. Linux: 6 years. React: 2 years.";
        let jd = "Python 4+ years required.";
        let (score, _) = score_experience(
            resume,
            jd,
            &skills(&["Python", "Docker", "Redis", "Git", "Linux", "React"]),
        );
        // Tier 100 for Python, 5 unrequired skills held, bonus capped at 20.
        assert_eq!(score, 100.0);

        let (score, _) = score_experience(
            "Docker: 2 years. Redis: 3 years.",
            "Python 4+ years required.",
            &skills(&["Python", "Docker", "Redis"]),
        );
        // Tier 20 for absent Python + 2 * 5 bonus.
        assert_eq!(score, 30.0);
    }

    #[test]
    fn test_score_clamped_to_range() {
        let (score, _) = score_experience(
            "4 years of Python. Docker: 2 years.",
            "Python 4 years.",
            &skills(&["Python", "Docker"]),
        );
        assert!((0.0..=100.0).contains(&score));
    }
}
