// All LLM prompt constants for the Resume module.

/// Role line for résumé analysis. Combined with the JSON-only rules.
pub const ANALYSIS_ROLE: &str = "You are an expert technical recruiter who compares résumés \
    against job descriptions honestly and specifically.";

/// Résumé analysis prompt template.
/// Placeholders: {resume}, {job_description}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume against the job description and provide detailed feedback.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_percentage": 68,
  "strengths": ["Strength of the resume for this role"],
  "improvements": ["Specific suggested improvement"],
  "keywords_missing": ["keyword from the job description absent in the resume"]
}

HARD RULES:
1. "match_percentage" is an INTEGER from 0 to 100
2. "strengths", "improvements" and "keywords_missing" each contain AT MOST 5 entries
3. No list may contain empty strings
4. Only list keywords that actually appear in the job description"#;
