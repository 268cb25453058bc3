//! Skill Extractor — pulls a candidate skill list out of free text via the
//! completion service, parsing structured or semi-structured output
//! defensively.
//!
//! Every public function here fails soft: a dead service or unparseable
//! reply degrades to an empty list or `None`, logged at warn, never an error
//! to the caller.

use tracing::warn;

use crate::embedding::truncate_chars;
use crate::llm_client::prompts::{
    JOB_ROLE_PROMPT_TEMPLATE, JOB_ROLE_SYSTEM, SKILL_EXTRACT_PROMPT_TEMPLATE,
    SKILL_EXTRACT_SYSTEM, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::llm_client::{strip_json_fences, CompletionService};

/// Documents are truncated to this many characters before prompting — a
/// quality/cost bound, not a correctness requirement.
const SKILL_TEXT_CAP: usize = 3000;

/// Line-based parsing keeps at most this many surviving lines.
const MAX_SKILL_LINES: usize = 30;

/// Lines containing any of these substrings are prompt chatter, not skills.
const NOISE_MARKERS: [&str; 3] = ["example", "note", "skills"];

/// Which side of the evaluation a document belongs to. Only changes the
/// wording of the extraction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job description",
        }
    }
}

/// Extracts a raw skill list from `text`. Returns an empty list on any
/// service or parse failure.
pub async fn extract_skills(
    svc: &dyn CompletionService,
    text: &str,
    kind: DocumentKind,
) -> Vec<String> {
    let prompt = SKILL_EXTRACT_PROMPT_TEMPLATE
        .replace("{kind}", kind.as_str())
        .replace("{text}", truncate_chars(text, SKILL_TEXT_CAP));

    match svc.complete(SKILL_EXTRACT_SYSTEM, &prompt).await {
        Ok(reply) => parse_skill_response(&reply),
        Err(e) => {
            warn!("skill extraction failed for {}: {e}", kind.as_str());
            Vec::new()
        }
    }
}

/// The output-parsing contract for skill extraction.
///
/// A trimmed reply shaped like a JSON array is parsed as one, keeping only
/// string elements; anything else goes through line-based salvage: strip
/// surrounding quotes/dashes/whitespace, drop noise lines, keep the first
/// `MAX_SKILL_LINES` survivors.
pub fn parse_skill_response(raw: &str) -> Vec<String> {
    let trimmed = strip_json_fences(raw).trim();

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            Ok(values) => values
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Err(e) => {
                warn!("skill reply looked like JSON but failed to parse: {e}");
                Vec::new()
            }
        };
    }

    trimmed
        .lines()
        .map(strip_line)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .take(MAX_SKILL_LINES)
        .map(String::from)
        .collect()
}

/// Strips surrounding quotes, dashes, bullets, and whitespace from one line.
fn strip_line(line: &str) -> &str {
    line.trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '-' | '*' | '•' | ','))
        .trim()
}

/// Suggests a job title for a résumé: first non-empty line of the reply.
/// Fails soft to `None`.
pub async fn suggest_job_role(svc: &dyn CompletionService, resume_text: &str) -> Option<String> {
    let prompt =
        JOB_ROLE_PROMPT_TEMPLATE.replace("{text}", truncate_chars(resume_text, SKILL_TEXT_CAP));
    match svc.complete(JOB_ROLE_SYSTEM, &prompt).await {
        Ok(reply) => reply
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(String::from),
        Err(e) => {
            warn!("job role suggestion failed: {e}");
            None
        }
    }
}

/// Summarizes a résumé against the JD. Fails soft to `None`.
pub async fn summarize_resume(
    svc: &dyn CompletionService,
    resume_text: &str,
    jd_text: &str,
) -> Option<String> {
    let prompt = SUMMARY_PROMPT_TEMPLATE
        .replace("{jd_text}", truncate_chars(jd_text, SKILL_TEXT_CAP))
        .replace("{resume_text}", truncate_chars(resume_text, SKILL_TEXT_CAP));
    match svc.complete(SUMMARY_SYSTEM, &prompt).await {
        Ok(reply) => {
            let summary = reply.trim().to_string();
            (!summary.is_empty()).then_some(summary)
        }
        Err(e) => {
            warn!("resume summary failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Canned completion backend for extraction tests.
    struct FixedReply(Result<&'static str, ()>);

    #[async_trait]
    impl CompletionService for FixedReply {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            match self.0 {
                Ok(reply) => Ok(reply.to_string()),
                Err(()) => Err(LlmError::Api {
                    status: 503,
                    message: "service unavailable".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_parse_json_array() {
        let skills = parse_skill_response(r#"["Python", "Docker", "PostgreSQL"]"#);
        assert_eq!(skills, vec!["Python", "Docker", "PostgreSQL"]);
    }

    #[test]
    fn test_parse_json_array_skips_non_strings() {
        let skills = parse_skill_response(r#"["Python", 42, null, {"name": "x"}, "Docker"]"#);
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_parse_fenced_json_array() {
        let skills = parse_skill_response("```json\n[\"Python\", \"Rust\"]\n```");
        assert_eq!(skills, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_parse_malformed_json_array_yields_empty() {
        // Starts with [ and ends with ] but is not valid JSON.
        assert!(parse_skill_response(r#"[Python, Docker]"#).is_empty());
    }

    #[test]
    fn test_parse_line_based_strips_decoration() {
        let reply = "- Python\n* \"Docker\"\n'PostgreSQL'\n  Rust  ";
        let skills = parse_skill_response(reply);
        assert_eq!(skills, vec!["Python", "Docker", "PostgreSQL", "Rust"]);
    }

    #[test]
    fn test_parse_line_based_drops_noise_lines() {
        let reply = "Here are the skills I found:\nPython\nNote: partial list\nFor example React\nDocker";
        let skills = parse_skill_response(reply);
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_parse_line_based_caps_at_30() {
        let reply: String = (0..50)
            .map(|i| format!("Item{i}\n"))
            .collect();
        assert_eq!(parse_skill_response(&reply).len(), 30);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_skill_response("").is_empty());
        assert!(parse_skill_response("   \n  ").is_empty());
    }

    #[tokio::test]
    async fn test_extract_skills_service_failure_is_empty() {
        let svc = FixedReply(Err(()));
        let skills = extract_skills(&svc, "some resume text", DocumentKind::Resume).await;
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_extract_skills_happy_path() {
        let svc = FixedReply(Ok(r#"["Python", "Docker"]"#));
        let skills = extract_skills(&svc, "some resume text", DocumentKind::Resume).await;
        assert_eq!(skills, vec!["Python", "Docker"]);
    }

    #[tokio::test]
    async fn test_suggest_job_role_takes_first_line() {
        let svc = FixedReply(Ok("Senior Backend Engineer\nBecause of the systems focus."));
        let role = suggest_job_role(&svc, "resume").await;
        assert_eq!(role.as_deref(), Some("Senior Backend Engineer"));
    }

    #[tokio::test]
    async fn test_suggest_job_role_fails_soft() {
        let svc = FixedReply(Err(()));
        assert_eq!(suggest_job_role(&svc, "resume").await, None);
    }

    #[tokio::test]
    async fn test_summarize_resume_fails_soft() {
        let svc = FixedReply(Err(()));
        assert_eq!(summarize_resume(&svc, "resume", "jd").await, None);
    }
}
