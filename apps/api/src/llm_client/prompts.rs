#![allow(dead_code)]

// All LLM prompt constants for evaluation calls. The prompts are service
// parameters — the parsing contracts in `extraction` are what the scoring
// engine actually depends on.

/// System prompt for skill extraction — pushes the model toward a bare JSON
/// array so the primary parse branch fires.
pub const SKILL_EXTRACT_SYSTEM: &str =
    "You are a technical recruiter extracting skills from documents. \
    Respond with a JSON array of skill name strings only. \
    Do NOT include explanations, notes, or examples. \
    Do NOT use markdown code fences.";

/// Skill extraction prompt template. Replace `{kind}` and `{text}` before sending.
pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract every concrete technical skill mentioned in the following {kind}.

Include programming languages, frameworks, libraries, databases, cloud platforms, and tooling. Exclude soft skills and job titles.

Return a JSON array of strings, for example: ["Python", "Docker", "PostgreSQL"]

{kind} text:
{text}"#;

/// System prompt for job-title suggestion (from the original career-advisor flow).
pub const JOB_ROLE_SYSTEM: &str =
    "You are a career advisor. Only respond with the most suitable job title \
    in 2 to 3 sentences only and no additional information.";

/// Job-title suggestion prompt template. Replace `{text}`.
pub const JOB_ROLE_PROMPT_TEMPLATE: &str =
    "Suggest the most suitable job title for this resume:\n\n{text}";

/// System prompt for résumé summarization.
pub const SUMMARY_SYSTEM: &str =
    "You are a resume evaluator. Summarize the candidate's profile against \
    the job description in 3 to 4 plain sentences. No headings, no lists.";

/// Summary prompt template. Replace `{jd_text}` and `{resume_text}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "Job Description:\n{jd_text}\n\nResume:\n{resume_text}";
