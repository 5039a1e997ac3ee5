//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{self, InterviewTopic};
use crate::errors::AppError;
use crate::interview::feedback::{evaluate_answer, Feedback};
use crate::interview::questions::{
    generate_question, prefetch_questions, InterviewQuestion, InterviewSettings,
};
use crate::interview::report::{build_report, InterviewReport};
use crate::interview::session::{Advance, CurrentPrompt, InterviewSession, SessionStatus};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    pub category_id: String,
    pub subcategory_id: Option<String>,
    #[serde(default)]
    pub settings: InterviewSettings,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionRequest {
    pub category_id: String,
    pub subcategory_id: Option<String>,
    #[serde(flatten)]
    pub settings: InterviewSettings,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
}

/// What the interview runner page renders.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub status: SessionStatus,
    pub topic: InterviewTopic,
    pub settings: InterviewSettings,
    pub questions: Vec<InterviewQuestion>,
    pub current: Option<CurrentPrompt>,
    pub answered_parts: usize,
    pub last_advance: Option<Advance>,
    pub report_ready: bool,
}

impl SessionView {
    fn new(session: &InterviewSession, last_advance: Option<Advance>) -> Self {
        Self {
            id: session.id,
            status: session.status,
            topic: session.topic.clone(),
            settings: session.settings.clone(),
            questions: session.questions.clone(),
            current: session.current_prompt(),
            answered_parts: session.answered_parts(),
            last_advance,
            report_ready: session.report.is_some(),
        }
    }
}

fn resolve_topic(category_id: &str, subcategory_id: Option<&str>) -> Result<InterviewTopic, AppError> {
    if category_id.trim().is_empty() {
        return Err(AppError::Validation("category_id is required".to_string()));
    }
    catalog::resolve(category_id.trim(), subcategory_id)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
///
/// Resolves the topic, prefetches all questions concurrently and opens a session.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let topic = resolve_topic(&request.category_id, request.subcategory_id.as_deref())?;
    let settings = request.settings.normalized()?;

    let questions = prefetch_questions(
        state.llm.as_ref(),
        &topic,
        &settings,
        state.config.questions_per_interview,
    )
    .await;

    let session = InterviewSession::new(topic, settings, questions);
    let view = SessionView::new(&session, None);
    let id = state.sessions.insert(session).await;
    info!("Interview session {id} started for {}", view.topic.category_id);

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::new(&session, None)))
}

/// POST /api/v1/interviews/:id/answer
///
/// Blank answers are rejected without moving the cursor. Answering the last
/// part finishes the interview.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let advance = state
        .sessions
        .update(id, |s| s.submit_answer(&request.answer))
        .await??;
    after_advance(&state, id, advance).await
}

/// POST /api/v1/interviews/:id/skip
pub async fn handle_skip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let advance = state.sessions.update(id, |s| s.skip()).await??;
    after_advance(&state, id, advance).await
}

/// POST /api/v1/interviews/:id/finish
///
/// Ends the session now: evaluates what was answered, or abandons it when
/// nothing was.
pub async fn handle_finish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = finish_session(&state, id).await?;
    Ok(Json(SessionView::new(&session, None)))
}

/// GET /api/v1/interviews/:id/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewReport>, AppError> {
    let session = state.sessions.get(id).await?;
    session
        .report
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} has no report yet")))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/questions/generate
///
/// One question outside of a session. Model failures surface as errors.
pub async fn handle_generate_question(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionRequest>,
) -> Result<Json<InterviewQuestion>, AppError> {
    let topic = resolve_topic(&request.category_id, request.subcategory_id.as_deref())?;
    let settings = request.settings.normalized()?;
    let question = generate_question(state.llm.as_ref(), &topic, &settings).await?;
    Ok(Json(question))
}

/// POST /api/v1/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<Feedback>, AppError> {
    let feedback = evaluate_answer(state.llm.as_ref(), &request.question, &request.answer).await?;
    Ok(Json(feedback))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn after_advance(state: &AppState, id: Uuid, advance: Advance) -> Result<Json<SessionView>, AppError> {
    let session = if advance == Advance::Exhausted {
        finish_session(state, id).await?
    } else {
        state.sessions.get(id).await?
    };
    Ok(Json(SessionView::new(&session, Some(advance))))
}

/// Runs the evaluation outside the store lock, then records the report.
async fn finish_session(state: &AppState, id: Uuid) -> Result<InterviewSession, AppError> {
    let answered = state.sessions.update(id, |s| s.begin_evaluation()).await??;

    if let Some(answered) = answered {
        info!("Evaluating {} answered questions for session {id}", answered.len());
        let report = build_report(state.llm.as_ref(), answered).await;
        state.sessions.update(id, |s| s.complete(report)).await?;
    } else {
        info!("Interview session {id} ended without answers");
    }

    state.sessions.get(id).await
}
