//! Mock interview session state machine.
//!
//! ```text
//! InProgress --submit/skip--> InProgress
//! InProgress --finish (answers)--> Evaluating --complete--> Completed
//! InProgress --finish (no answers)--> Abandoned
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::InterviewTopic;
use crate::interview::questions::{InterviewQuestion, InterviewSettings};
use crate::interview::report::InterviewReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Evaluating,
    Completed,
    Abandoned,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Evaluating => "evaluating",
            SessionStatus::Completed => "completed",
            SessionStatus::Abandoned => "abandoned",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Answer cannot be empty")]
    EmptyAnswer,

    #[error("Interview is not in progress (status: {0})")]
    NotActive(SessionStatus),

    #[error("Interview feedback is already being generated")]
    AlreadyEvaluating,
}

/// What happened to the cursor after an answer or skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    NextPart,
    NextQuestion,
    /// The last part of the last question was passed.
    Exhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub question: usize,
    pub part: usize,
    pub exhausted: bool,
}

/// The part the candidate should answer next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPrompt {
    pub question_index: usize,
    pub part_index: usize,
    pub total_questions: usize,
    pub total_parts: usize,
    pub scenario: String,
    pub part: String,
    pub time_limit_secs: Option<u32>,
}

/// A question with at least one answered part, ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredQuestion {
    pub index: usize,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub topic: InterviewTopic,
    pub settings: InterviewSettings,
    pub questions: Vec<InterviewQuestion>,
    /// One slot per part of each question.
    pub answers: Vec<Vec<Option<String>>>,
    pub cursor: Cursor,
    pub status: SessionStatus,
    pub report: Option<InterviewReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
    pub fn new(topic: InterviewTopic, settings: InterviewSettings, questions: Vec<InterviewQuestion>) -> Self {
        let answers = questions.iter().map(|q| vec![None; q.parts.len()]).collect();
        let cursor = Cursor {
            exhausted: questions.is_empty(),
            ..Cursor::default()
        };
        Self {
            id: Uuid::new_v4(),
            topic,
            settings,
            questions,
            answers,
            cursor,
            status: SessionStatus::InProgress,
            report: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::InProgress => Ok(()),
            other => Err(SessionError::NotActive(other)),
        }
    }

    pub fn current_prompt(&self) -> Option<CurrentPrompt> {
        if self.cursor.exhausted || self.status != SessionStatus::InProgress {
            return None;
        }
        let question = self.questions.get(self.cursor.question)?;
        Some(CurrentPrompt {
            question_index: self.cursor.question,
            part_index: self.cursor.part,
            total_questions: self.questions.len(),
            total_parts: question.parts.len(),
            scenario: question.scenario.clone(),
            part: question.parts.get(self.cursor.part)?.clone(),
            time_limit_secs: self.settings.mode.time_limit_secs(),
        })
    }

    /// Records an answer for the current part and advances.
    /// A blank answer is rejected and the cursor stays put.
    pub fn submit_answer(&mut self, text: &str) -> Result<Advance, SessionError> {
        self.ensure_active()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        if self.cursor.exhausted {
            return Ok(Advance::Exhausted);
        }
        self.answers[self.cursor.question][self.cursor.part] = Some(text.to_string());
        Ok(self.advance())
    }

    /// Moves past the current part without recording an answer.
    pub fn skip(&mut self) -> Result<Advance, SessionError> {
        self.ensure_active()?;
        if self.cursor.exhausted {
            return Ok(Advance::Exhausted);
        }
        Ok(self.advance())
    }

    fn advance(&mut self) -> Advance {
        let parts = self.questions[self.cursor.question].parts.len();
        if self.cursor.part + 1 < parts {
            self.cursor.part += 1;
            Advance::NextPart
        } else if self.cursor.question + 1 < self.questions.len() {
            self.cursor.question += 1;
            self.cursor.part = 0;
            Advance::NextQuestion
        } else {
            self.cursor.exhausted = true;
            Advance::Exhausted
        }
    }

    pub fn answered_parts(&self) -> usize {
        self.answers.iter().flatten().filter(|a| a.is_some()).count()
    }

    /// Every question with at least one answered part, as evaluation input.
    pub fn answered_questions(&self) -> Vec<AnsweredQuestion> {
        self.questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .filter(|(_, (_, answers))| answers.iter().any(Option::is_some))
            .map(|(index, (question, answers))| AnsweredQuestion {
                index,
                question: question.full_text(),
                answer: combine_answers(answers),
            })
            .collect()
    }

    /// Moves to `Evaluating` and returns the answers to evaluate, or moves to
    /// `Abandoned` and returns `None` when nothing was answered.
    pub fn begin_evaluation(&mut self) -> Result<Option<Vec<AnsweredQuestion>>, SessionError> {
        match self.status {
            SessionStatus::InProgress => {}
            SessionStatus::Evaluating => return Err(SessionError::AlreadyEvaluating),
            other => return Err(SessionError::NotActive(other)),
        }

        let answered = self.answered_questions();
        if answered.is_empty() {
            self.status = SessionStatus::Abandoned;
            self.finished_at = Some(Utc::now());
            return Ok(None);
        }

        self.status = SessionStatus::Evaluating;
        Ok(Some(answered))
    }

    pub fn complete(&mut self, report: InterviewReport) {
        self.status = SessionStatus::Completed;
        self.finished_at = Some(Utc::now());
        self.report = Some(report);
    }

    pub fn practice_duration(&self) -> Option<Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}

fn combine_answers(answers: &[Option<String>]) -> String {
    if answers.len() == 1 {
        return answers[0].clone().unwrap_or_default();
    }
    answers
        .iter()
        .enumerate()
        .filter_map(|(i, a)| a.as_ref().map(|text| format!("Part {}: {}", i + 1, text)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
