use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::{InterviewSession, SessionStatus};

/// Process-local session store. The lock is never held across an await.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, InterviewSession>>>,
    capacity: usize,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Inserts a session, evicting the oldest ones when over capacity.
    /// Finished sessions are evicted before in-progress ones. Sessions that
    /// are being evaluated are never evicted.
    pub async fn insert(&self, session: InterviewSession) -> Uuid {
        let id = session.id;
        let mut sessions = self.inner.write().await;
        while sessions.len() >= self.capacity {
            let victim = sessions
                .values()
                .filter(|s| s.status != SessionStatus::Evaluating)
                .min_by_key(|s| (s.status == SessionStatus::InProgress, s.started_at))
                .map(|s| s.id);
            match victim {
                Some(victim) => {
                    debug!("Evicting interview session {victim}");
                    sessions.remove(&victim);
                }
                None => break,
            }
        }
        sessions.insert(id, session);
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<InterviewSession, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Applies `f` to the session under the write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut InterviewSession) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Completed sessions, most recently finished first.
    pub async fn completed(&self) -> Vec<InterviewSession> {
        let mut done: Vec<InterviewSession> = self
            .inner
            .read()
            .await
            .values()
            .filter(|s| s.status == SessionStatus::Completed)
            .cloned()
            .collect();
        done.sort_by(|a, b| b.finished_at.cmp(&a.finished_at));
        done
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Interview session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;
    use crate::interview::questions::{InterviewQuestion, InterviewSettings};
    use crate::interview::report::aggregate;

    fn session() -> InterviewSession {
        InterviewSession::new(
            resolve("marketing", None).unwrap(),
            InterviewSettings::default(),
            vec![InterviewQuestion::fallback(0)],
        )
    }

    #[tokio::test]
    async fn test_insert_get_update_remove() {
        let store = SessionStore::new(4);
        let id = store.insert(session()).await;

        let advance = store.update(id, |s| s.submit_answer("hello")).await.unwrap();
        assert!(advance.is_ok());
        assert_eq!(store.get(id).await.unwrap().answered_parts(), 1);

        store.remove(id).await.unwrap();
        assert!(matches!(store.get(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(store.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_eviction_prefers_finished_sessions() {
        let store = SessionStore::new(2);

        let mut finished = session();
        finished.submit_answer("done").unwrap();
        finished.begin_evaluation().unwrap();
        finished.complete(aggregate(vec![]));
        let finished_id = store.insert(finished).await;

        let active_id = store.insert(session()).await;
        let newest_id = store.insert(session()).await;

        assert!(store.get(finished_id).await.is_err());
        assert!(store.get(active_id).await.is_ok());
        assert!(store.get(newest_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_eviction_spares_session_under_evaluation() {
        let store = SessionStore::new(2);

        let mut evaluating = session();
        evaluating.submit_answer("answer").unwrap();
        assert!(evaluating.begin_evaluation().unwrap().is_some());
        let evaluating_id = store.insert(evaluating).await;

        let first_id = store.insert(session()).await;
        let second_id = store.insert(session()).await;

        assert!(store.get(first_id).await.is_err());
        assert!(store.get(second_id).await.is_ok());
        store
            .update(evaluating_id, |s| s.complete(aggregate(vec![])))
            .await
            .unwrap();
        assert_eq!(
            store.get(evaluating_id).await.unwrap().status,
            SessionStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_completed_lists_only_completed() {
        let store = SessionStore::new(8);
        store.insert(session()).await;

        let mut done = session();
        done.submit_answer("x").unwrap();
        done.begin_evaluation().unwrap();
        done.complete(aggregate(vec![]));
        let done_id = store.insert(done).await;

        let completed = store.completed().await;
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, done_id);
    }
}
