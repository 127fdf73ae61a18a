use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemorySessionRepository, SessionRepository},
    services::study_session_service::StudySessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub study_session_service: Arc<StudySessionService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(InMemorySessionRepository::new());
        Self::with_repository(config, session_repository)
    }

    pub fn with_repository(config: Config, repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            study_session_service: Arc::new(StudySessionService::new(
                repository,
                config.max_syllabus_bytes,
            )),
        }
    }
}
