use std::sync::Arc;

use crate::config::Config;
use crate::interview::store::SessionStore;
use crate::llm_client::GenerativeModel;
use crate::study::StudyProgress;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; a scripted model in tests.
    pub llm: Arc<dyn GenerativeModel>,
    pub config: Config,
    pub sessions: SessionStore,
    pub study: StudyProgress,
}

impl AppState {
    pub fn new(llm: Arc<dyn GenerativeModel>, config: Config) -> Self {
        Self {
            sessions: SessionStore::new(config.max_sessions),
            study: StudyProgress::new(),
            llm,
            config,
        }
    }
}
