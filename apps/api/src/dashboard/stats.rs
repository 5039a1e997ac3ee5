//! Practice statistics derived from completed interview sessions.

use serde::Serialize;

use crate::interview::session::InterviewSession;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub interviews_completed: usize,
    /// Score of the most recently finished session that has one.
    pub last_performance: Option<u8>,
    pub average_score: Option<u8>,
    pub practice_minutes: i64,
    pub goal_score: u8,
}

/// `completed` must be ordered most recently finished first.
pub fn compute(completed: &[InterviewSession], goal_score: u8) -> DashboardStats {
    let scores: Vec<u8> = completed
        .iter()
        .filter_map(|s| s.report.as_ref().and_then(|r| r.overall_score))
        .collect();

    let average_score = if scores.is_empty() {
        None
    } else {
        let total: u32 = scores.iter().map(|&s| u32::from(s)).sum();
        Some((total as f64 / scores.len() as f64).round() as u8)
    };

    let practice_seconds: i64 = completed
        .iter()
        .filter_map(InterviewSession::practice_duration)
        .map(|d| d.num_seconds().max(0))
        .sum();

    DashboardStats {
        interviews_completed: completed.len(),
        last_performance: scores.first().copied(),
        average_score,
        practice_minutes: practice_seconds / 60,
        goal_score,
    }
}
