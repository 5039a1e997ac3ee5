//! Axum route handlers for the study guide.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::study::bank::{QuestionProgress, StudyCategorySummary, StudyFilter, StudyQuestion};

#[derive(Debug, Serialize)]
pub struct StudyQuestionsResponse {
    pub questions: Vec<StudyQuestion>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StudyCategoriesResponse {
    pub categories: Vec<StudyCategorySummary>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub id: String,
    #[serde(flatten)]
    pub progress: QuestionProgress,
}

/// GET /api/v1/study/questions?search=&category=&difficulty=&bookmarked_only=
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(filter): Query<StudyFilter>,
) -> Json<StudyQuestionsResponse> {
    let questions = state.study.questions(&filter).await;
    Json(StudyQuestionsResponse {
        total: questions.len(),
        questions,
    })
}

/// GET /api/v1/study/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<StudyCategoriesResponse> {
    Json(StudyCategoriesResponse {
        categories: state.study.categories().await,
    })
}

/// POST /api/v1/study/questions/:id/bookmark
pub async fn handle_toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, AppError> {
    let progress = state.study.toggle_bookmark(&id).await?;
    Ok(Json(ProgressResponse { id, progress }))
}

/// POST /api/v1/study/questions/:id/complete
pub async fn handle_toggle_completed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgressResponse>, AppError> {
    let progress = state.study.toggle_completed(&id).await?;
    Ok(Json(ProgressResponse { id, progress }))
}
