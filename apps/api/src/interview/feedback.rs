//! Answer feedback: the strict feedback contract and one-answer evaluation.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_ROLE};
use crate::llm_client::prompts::{fill_template, json_system, quote_user_text};
use crate::llm_client::{call_json, GenerativeModel, Validate};

/// Score plus strengths/improvements/summary for one answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub summary: String,
    pub details: Vec<String>,
}

impl Validate for Feedback {
    fn validate(&self) -> Result<(), String> {
        if self.score > 100 {
            return Err(format!("score {} is outside 0..=100", self.score));
        }
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        if self.details.is_empty() {
            return Err("details must contain at least one point".to_string());
        }
        let lists = [
            ("strengths", &self.strengths),
            ("improvements", &self.improvements),
            ("details", &self.details),
        ];
        for (name, list) in lists {
            if list.iter().any(|s| s.trim().is_empty()) {
                return Err(format!("{name} contains an empty entry"));
            }
        }
        Ok(())
    }
}

/// Result of evaluating one answer inside an interview report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Evaluated(Feedback),
    /// The model call failed or its response was rejected.
    Unavailable { reason: String },
}

impl FeedbackOutcome {
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            FeedbackOutcome::Evaluated(f) => Some(f),
            FeedbackOutcome::Unavailable { .. } => None,
        }
    }
}

pub fn feedback_prompt(question: &str, answer: &str) -> String {
    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("question", quote_user_text(question).as_str()),
            ("answer", quote_user_text(answer).as_str()),
        ],
    )
}

/// Evaluates one question/answer pair. A blank answer is a validation error;
/// a non-conforming model response is an `AppError::Llm`.
pub async fn evaluate_answer(
    model: &dyn GenerativeModel,
    question: &str,
    answer: &str,
) -> Result<Feedback, AppError> {
    if question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let prompt = feedback_prompt(question, answer);
    call_json::<Feedback>(model, &prompt, &json_system(FEEDBACK_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Feedback generation failed: {e}")))
}
