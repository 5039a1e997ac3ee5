//! Interview question generation: settings, prompt building, and concurrent
//! prefetch with per-slot fallback questions.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{Difficulty, InterviewTopic};
use crate::errors::AppError;
use crate::interview::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_ROLE};
use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::{call_json, GenerativeModel, Validate};

const MAX_PARTS: usize = 8;

/// Used when a prefetch slot fails or returns a non-conforming question.
pub const FALLBACK_QUESTIONS: [&str; 5] = [
    "Tell me about a time when you had to solve a complex problem.",
    "What are your greatest strengths and weaknesses?",
    "Why are you interested in this position?",
    "Describe a situation where you had to work with a difficult team member.",
    "How do you handle pressure and tight deadlines?",
];

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    #[default]
    Standard,
    /// Harder questions under a two-minute answer clock.
    Stress,
    /// Easier questions under a one-minute answer clock.
    Rapid,
}

impl InterviewMode {
    pub fn effective_difficulty(&self, selected: Difficulty) -> Difficulty {
        match self {
            InterviewMode::Standard => selected,
            InterviewMode::Stress => Difficulty::Hard,
            InterviewMode::Rapid => Difficulty::Easy,
        }
    }

    pub fn time_limit_secs(&self) -> Option<u32> {
        match self {
            InterviewMode::Standard => None,
            InterviewMode::Stress => Some(120),
            InterviewMode::Rapid => Some(60),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewSettings {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub mode: InterviewMode,
    #[serde(default)]
    pub company: Option<String>,
}

impl InterviewSettings {
    /// Trims the company name and drops it when blank.
    pub fn normalized(mut self) -> Result<Self, AppError> {
        self.company = self
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if let Some(company) = &self.company {
            if company.chars().count() > 100 {
                return Err(AppError::Validation(
                    "company must be at most 100 characters".to_string(),
                ));
            }
        }
        Ok(self)
    }

    pub fn effective_difficulty(&self) -> Difficulty {
        self.mode.effective_difficulty(self.difficulty)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Question contract
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Generated,
    Fallback,
}

/// A multi-part interview question as presented to the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub scenario: String,
    pub parts: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub source: QuestionSource,
}

impl InterviewQuestion {
    pub fn fallback(slot: usize) -> Self {
        Self {
            scenario: String::new(),
            parts: vec![FALLBACK_QUESTIONS[slot % FALLBACK_QUESTIONS.len()].to_string()],
            follow_up_questions: vec![],
            source: QuestionSource::Fallback,
        }
    }

    /// Scenario plus parts as one block of text, numbered when multi-part.
    pub fn full_text(&self) -> String {
        let parts = if self.parts.len() == 1 {
            self.parts[0].clone()
        } else {
            self.parts
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{}. {}", i + 1, p))
                .collect::<Vec<_>>()
                .join("\n")
        };
        if self.scenario.trim().is_empty() {
            parts
        } else {
            format!("{}\n\n{}", self.scenario.trim(), parts)
        }
    }
}

/// Exactly what the model must return for one question.
#[derive(Debug, Deserialize)]
struct QuestionPayload {
    scenario: String,
    parts: Vec<String>,
    follow_up_questions: Vec<String>,
}

impl Validate for QuestionPayload {
    fn validate(&self) -> Result<(), String> {
        if self.scenario.trim().is_empty() {
            return Err("scenario is empty".to_string());
        }
        if self.parts.is_empty() || self.parts.len() > MAX_PARTS {
            return Err(format!(
                "parts must contain 1 to {MAX_PARTS} entries, got {}",
                self.parts.len()
            ));
        }
        if self.parts.iter().any(|p| p.trim().is_empty()) {
            return Err("parts contains an empty entry".to_string());
        }
        if self.follow_up_questions.iter().any(|q| q.trim().is_empty()) {
            return Err("follow_up_questions contains an empty entry".to_string());
        }
        Ok(())
    }
}

impl From<QuestionPayload> for InterviewQuestion {
    fn from(payload: QuestionPayload) -> Self {
        Self {
            scenario: payload.scenario.trim().to_string(),
            parts: payload.parts.into_iter().map(|p| p.trim().to_string()).collect(),
            follow_up_questions: payload
                .follow_up_questions
                .into_iter()
                .map(|q| q.trim().to_string())
                .collect(),
            source: QuestionSource::Generated,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompting
// ────────────────────────────────────────────────────────────────────────────

/// The one-sentence request at the top of the question prompt.
pub fn question_request(topic: &InterviewTopic, difficulty: Difficulty, company: Option<&str>) -> String {
    let mut request = format!(
        "Generate a realistic {difficulty}-level interview question for a {} role",
        topic.category_name
    );
    if let Some(sub) = &topic.subcategory_name {
        request.push_str(&format!(" focused specifically on {sub}"));
    }
    if let Some(company) = company {
        request.push_str(&format!(" in the style of {company} interviews"));
    }
    request.push_str(" designed to be challenging and relevant.");
    request
}

pub fn question_prompt(
    topic: &InterviewTopic,
    difficulty: Difficulty,
    company: Option<&str>,
    slot: usize,
    count: usize,
) -> String {
    fill_template(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("request", question_request(topic, difficulty, company).as_str()),
            ("slot", (slot + 1).to_string().as_str()),
            ("count", count.to_string().as_str()),
        ],
    )
}

/// Generates one question. Failures surface to the caller.
pub async fn generate_question(
    model: &dyn GenerativeModel,
    topic: &InterviewTopic,
    settings: &InterviewSettings,
) -> Result<InterviewQuestion, AppError> {
    let prompt = question_prompt(
        topic,
        settings.effective_difficulty(),
        settings.company.as_deref(),
        0,
        1,
    );
    let payload: QuestionPayload = call_json(model, &prompt, &json_system(QUESTION_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;
    Ok(payload.into())
}

/// Generates `count` questions concurrently. Every slot that fails is replaced
/// by the fallback question for that slot, so the result always has `count` entries.
pub async fn prefetch_questions(
    model: &dyn GenerativeModel,
    topic: &InterviewTopic,
    settings: &InterviewSettings,
    count: usize,
) -> Vec<InterviewQuestion> {
    let difficulty = settings.effective_difficulty();
    let system = json_system(QUESTION_ROLE);
    let prompts: Vec<String> = (0..count)
        .map(|slot| question_prompt(topic, difficulty, settings.company.as_deref(), slot, count))
        .collect();

    let results = join_all(
        prompts
            .iter()
            .map(|prompt| call_json::<QuestionPayload>(model, prompt, &system)),
    )
    .await;

    let questions: Vec<InterviewQuestion> = results
        .into_iter()
        .enumerate()
        .map(|(slot, result)| match result {
            Ok(payload) => payload.into(),
            Err(e) => {
                warn!("Question slot {slot} fell back to a stock question: {e}");
                InterviewQuestion::fallback(slot)
            }
        })
        .collect();

    let fallbacks = questions
        .iter()
        .filter(|q| q.source == QuestionSource::Fallback)
        .count();
    info!(
        "Prefetched {} questions for {} ({} fallback)",
        questions.len(),
        topic.category_id,
        fallbacks
    );

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;
    use crate::llm_client::testing::ScriptedModel;

    const GOOD_QUESTION: &str = r#"{
        "scenario": "You own checkout for a marketplace.",
        "parts": ["How do you measure success?", "What do you ship first?"],
        "follow_up_questions": ["How would this change at 10x scale?"]
    }"#;

    fn swe_topic() -> InterviewTopic {
        resolve("software-engineer", Some("system-design")).unwrap()
    }

    #[test]
    fn test_mode_overrides_difficulty() {
        assert_eq!(
            InterviewMode::Stress.effective_difficulty(Difficulty::Easy),
            Difficulty::Hard
        );
        assert_eq!(
            InterviewMode::Rapid.effective_difficulty(Difficulty::Hard),
            Difficulty::Easy
        );
        assert_eq!(
            InterviewMode::Standard.effective_difficulty(Difficulty::Hard),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_time_limits_per_mode() {
        assert_eq!(InterviewMode::Standard.time_limit_secs(), None);
        assert_eq!(InterviewMode::Stress.time_limit_secs(), Some(120));
        assert_eq!(InterviewMode::Rapid.time_limit_secs(), Some(60));
    }

    #[test]
    fn test_settings_defaults_from_empty_json() {
        let settings: InterviewSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.mode, InterviewMode::Standard);
        assert!(settings.company.is_none());
    }

    #[test]
    fn test_settings_normalize_blank_company() {
        let settings = InterviewSettings {
            company: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized()
        .unwrap();
        assert!(settings.company.is_none());
    }

    #[test]
    fn test_settings_reject_long_company() {
        let settings = InterviewSettings {
            company: Some("x".repeat(101)),
            ..Default::default()
        };
        assert!(settings.normalized().is_err());
    }

    #[test]
    fn test_question_request_full() {
        let request = question_request(&swe_topic(), Difficulty::Hard, Some("Stripe"));
        assert_eq!(
            request,
            "Generate a realistic hard-level interview question for a Software Engineering role \
             focused specifically on System Design in the style of Stripe interviews designed \
             to be challenging and relevant."
        );
    }

    #[test]
    fn test_question_request_without_subcategory_or_company() {
        let topic = resolve("accounting", None).unwrap();
        let request = question_request(&topic, Difficulty::Easy, None);
        assert_eq!(
            request,
            "Generate a realistic easy-level interview question for a Accounting role designed \
             to be challenging and relevant."
        );
    }

    #[test]
    fn test_question_prompt_numbers_slots_from_one() {
        let prompt = question_prompt(&swe_topic(), Difficulty::Medium, None, 2, 5);
        assert!(prompt.contains("This is question 3 of 5"));
        assert!(prompt.contains("\"follow_up_questions\""));
    }

    #[test]
    fn test_payload_validation_rejects_empty_parts() {
        let payload = QuestionPayload {
            scenario: "context".to_string(),
            parts: vec![],
            follow_up_questions: vec![],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_validation_rejects_blank_scenario() {
        let payload = QuestionPayload {
            scenario: " ".to_string(),
            parts: vec!["a".to_string()],
            follow_up_questions: vec![],
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_requires_follow_up_key() {
        let text = r#"{"scenario": "s", "parts": ["p"]}"#;
        assert!(serde_json::from_str::<QuestionPayload>(text).is_err());
    }

    #[test]
    fn test_full_text_single_part_without_scenario() {
        assert_eq!(
            InterviewQuestion::fallback(0).full_text(),
            "Tell me about a time when you had to solve a complex problem."
        );
    }

    #[test]
    fn test_full_text_numbers_multiple_parts() {
        let question = InterviewQuestion {
            scenario: "Scenario.".to_string(),
            parts: vec!["A?".to_string(), "B?".to_string()],
            follow_up_questions: vec![],
            source: QuestionSource::Generated,
        };
        assert_eq!(question.full_text(), "Scenario.\n\n1. A?\n2. B?");
    }

    #[test]
    fn test_fallback_cycles_through_stock_questions() {
        assert_eq!(InterviewQuestion::fallback(6).parts[0], FALLBACK_QUESTIONS[1]);
    }

    #[tokio::test]
    async fn test_prefetch_returns_generated_questions() {
        let model = ScriptedModel::new().reply("interview question", GOOD_QUESTION);
        let questions =
            prefetch_questions(&model, &swe_topic(), &InterviewSettings::default(), 3).await;

        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.source == QuestionSource::Generated));
        assert_eq!(questions[0].parts.len(), 2);
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test]
    async fn test_prefetch_replaces_failed_slots_with_fallbacks() {
        let model = ScriptedModel::new()
            .fail("question 2 of 3", "upstream down")
            .reply("question 3 of 3", "not json at all")
            .reply("interview question", GOOD_QUESTION);
        let questions =
            prefetch_questions(&model, &swe_topic(), &InterviewSettings::default(), 3).await;

        assert_eq!(questions[0].source, QuestionSource::Generated);
        assert_eq!(questions[1], InterviewQuestion::fallback(1));
        assert_eq!(questions[2], InterviewQuestion::fallback(2));
    }

    #[tokio::test]
    async fn test_prefetch_uses_mode_difficulty() {
        let model = ScriptedModel::new().reply("interview question", GOOD_QUESTION);
        let settings = InterviewSettings {
            difficulty: Difficulty::Easy,
            mode: InterviewMode::Stress,
            company: None,
        };
        prefetch_questions(&model, &swe_topic(), &settings, 1).await;
        assert!(model.prompts()[0].contains("hard-level"));
    }

    #[tokio::test]
    async fn test_generate_question_surfaces_errors() {
        let model = ScriptedModel::new().reply("interview question", "{\"scenario\": \"\"}");
        let result = generate_question(&model, &swe_topic(), &InterviewSettings::default()).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }
}
