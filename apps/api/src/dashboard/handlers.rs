use axum::{extract::State, Json};
use serde::Serialize;

use crate::dashboard::stats::{compute, DashboardStats};
use crate::dashboard::tips::random_tip;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: &'static str,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    let completed = state.sessions.completed().await;
    Json(compute(&completed, state.config.practice_goal_score))
}

/// GET /api/v1/tips/random
pub async fn handle_random_tip() -> Json<TipResponse> {
    Json(TipResponse { tip: random_tip() })
}
