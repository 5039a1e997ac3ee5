//! Résumé vs job-description comparison: the model's analysis contract plus
//! deterministic skill detection.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system, quote_user_text};
use crate::llm_client::{call_json, GenerativeModel, Validate};
use crate::resume::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_ROLE};
use crate::resume::skills::{detect_skills, SkillMatch};

const MAX_LIST_ENTRIES: usize = 5;

/// Exactly what the model must return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub match_percentage: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords_missing: Vec<String>,
}

impl Validate for ResumeAnalysis {
    fn validate(&self) -> Result<(), String> {
        if self.match_percentage > 100 {
            return Err(format!(
                "match_percentage {} is outside 0..=100",
                self.match_percentage
            ));
        }
        let lists = [
            ("strengths", &self.strengths),
            ("improvements", &self.improvements),
            ("keywords_missing", &self.keywords_missing),
        ];
        for (name, list) in lists {
            if list.len() > MAX_LIST_ENTRIES {
                return Err(format!(
                    "{name} has {} entries, at most {MAX_LIST_ENTRIES} allowed",
                    list.len()
                ));
            }
            if list.iter().any(|s| s.trim().is_empty()) {
                return Err(format!("{name} contains an empty entry"));
            }
        }
        Ok(())
    }
}

/// What the résumé comparer page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeComparison {
    pub match_percentage: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub skills: Vec<SkillMatch>,
}

pub fn analysis_prompt(resume: &str, job_description: &str) -> String {
    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("resume", quote_user_text(resume).as_str()),
            ("job_description", quote_user_text(job_description).as_str()),
        ],
    )
}

/// Compares a résumé with a job description. Both texts are required.
pub async fn compare(
    model: &dyn GenerativeModel,
    resume: &str,
    job_description: &str,
) -> Result<ResumeComparison, AppError> {
    if resume.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let prompt = analysis_prompt(resume, job_description);
    let analysis: ResumeAnalysis = call_json(model, &prompt, &json_system(ANALYSIS_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    let skills = detect_skills(resume, job_description, &analysis.keywords_missing);
    info!(
        "Resume analysis: match={}%, {} skills detected",
        analysis.match_percentage,
        skills.len()
    );

    Ok(ResumeComparison {
        match_percentage: analysis.match_percentage,
        strengths: analysis.strengths,
        improvements: analysis.improvements,
        keywords_missing: analysis.keywords_missing,
        skills,
    })
}
