use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::StudySession,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: StudySession) -> AppResult<StudySession>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudySession>>;
    async fn update(&self, session: StudySession) -> AppResult<StudySession>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Keeps sessions in process memory. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, StudySession>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: StudySession) -> AppResult<StudySession> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::ValidationError(format!(
                "Session '{}' already exists",
                session.id
            )));
        }
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudySession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: StudySession) -> AppResult<StudySession> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id) {
            Some(existing) => {
                *existing = session.clone();
                Ok(session)
            }
            None => Err(AppError::NotFound(format!(
                "Session '{}' not found",
                session.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_find_update_delete_round_trip() {
        let repo = InMemorySessionRepository::new();
        let session = StudySession::new("1. SQL\n- SELECT");
        let id = session.id.clone();

        repo.create(session.clone()).await.expect("create should work");

        let duplicate = repo.create(session.clone()).await;
        assert!(matches!(duplicate, Err(AppError::ValidationError(_))));

        let found = repo.find_by_id(&id).await.expect("find should work");
        assert_eq!(found.as_ref().map(|s| s.topics.len()), Some(1));

        let mut changed = session;
        changed.rebuild("Physics\nChemistry");
        repo.update(changed).await.expect("update should work");
        let found = repo
            .find_by_id(&id)
            .await
            .expect("find should work")
            .expect("session should exist");
        assert_eq!(found.topics.len(), 2);

        repo.delete(&id).await.expect("delete should work");
        assert!(repo.find_by_id(&id).await.expect("find should work").is_none());
    }

    #[tokio::test]
    async fn update_and_delete_missing_session_are_not_found() {
        let repo = InMemorySessionRepository::new();

        let missing_update = repo.update(StudySession::new("Optics")).await;
        assert!(matches!(missing_update, Err(AppError::NotFound(_))));

        let missing_delete = repo.delete("missing").await;
        assert!(matches!(missing_delete, Err(AppError::NotFound(_))));
    }
}
