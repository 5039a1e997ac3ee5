//! Interview report: concurrent feedback for every answered question, then
//! aggregation into an overall score and combined strengths/improvements.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::interview::feedback::{evaluate_answer, FeedbackOutcome};
use crate::interview::session::AnsweredQuestion;
use crate::llm_client::GenerativeModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionReview {
    pub index: usize,
    pub question: String,
    pub answer: String,
    pub outcome: FeedbackOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewReport {
    /// Rounded mean of the evaluated scores. `None` when nothing could be evaluated.
    pub overall_score: Option<u8>,
    pub evaluated_count: usize,
    pub questions: Vec<QuestionReview>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub details: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Requests feedback for all answers concurrently and aggregates the results.
pub async fn build_report(model: &dyn GenerativeModel, answered: Vec<AnsweredQuestion>) -> InterviewReport {
    let outcomes = join_all(
        answered
            .iter()
            .map(|a| evaluate_answer(model, &a.question, &a.answer)),
    )
    .await;

    let reviews: Vec<QuestionReview> = answered
        .into_iter()
        .zip(outcomes)
        .map(|(a, outcome)| {
            let outcome = match outcome {
                Ok(feedback) => FeedbackOutcome::Evaluated(feedback),
                Err(e) => {
                    warn!("Feedback for question {} unavailable: {e}", a.index);
                    FeedbackOutcome::Unavailable {
                        reason: e.to_string(),
                    }
                }
            };
            QuestionReview {
                index: a.index,
                question: a.question,
                answer: a.answer,
                outcome,
            }
        })
        .collect();

    let report = aggregate(reviews);
    info!(
        "Interview report built: score={:?}, evaluated {}/{}",
        report.overall_score,
        report.evaluated_count,
        report.questions.len()
    );
    report
}

/// Pure aggregation over per-question reviews.
pub fn aggregate(questions: Vec<QuestionReview>) -> InterviewReport {
    let evaluated: Vec<_> = questions
        .iter()
        .filter_map(|q| q.outcome.feedback())
        .collect();

    let overall_score = if evaluated.is_empty() {
        None
    } else {
        let total: u32 = evaluated.iter().map(|f| u32::from(f.score)).sum();
        Some((total as f64 / evaluated.len() as f64).round() as u8)
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let mut details = Vec::new();
    for feedback in &evaluated {
        push_unique(&mut strengths, &feedback.strengths);
        push_unique(&mut improvements, &feedback.improvements);
        details.extend(feedback.details.iter().cloned());
    }

    InterviewReport {
        overall_score,
        evaluated_count: evaluated.len(),
        questions,
        strengths,
        improvements,
        details,
        generated_at: Utc::now(),
    }
}

/// Appends items not already present (case-insensitive), keeping first-seen order.
fn push_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        let lower = item.to_lowercase();
        if !target.iter().any(|t| t.to_lowercase() == lower) {
            target.push(item.clone());
        }
    }
}
