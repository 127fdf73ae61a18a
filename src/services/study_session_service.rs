use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{QuizAttempt, StudyProgress, StudySession, TopicHints, TopicQuiz},
        dto::{
            request::{SubmitQuizAttemptRequest, SyllabusRequest},
            response::{DeleteSessionResponse, ParsedSyllabusDto, SessionDto},
        },
    },
    repositories::SessionRepository,
    services::{
        quiz_attempt_service::QuizAttemptService, subject_classifier::classify_subject,
        syllabus_parser::parse_syllabus,
    },
};

pub struct StudySessionService {
    repository: Arc<dyn SessionRepository>,
    max_syllabus_bytes: usize,
}

impl StudySessionService {
    pub fn new(repository: Arc<dyn SessionRepository>, max_syllabus_bytes: usize) -> Self {
        Self {
            repository,
            max_syllabus_bytes,
        }
    }

    async fn load(&self, id: &str) -> AppResult<StudySession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }

    pub async fn create_session(&self, request: SyllabusRequest) -> AppResult<SessionDto> {
        request.check_size(self.max_syllabus_bytes)?;

        let session = StudySession::new(&request.syllabus_text);
        let session = self.repository.create(session).await?;

        log::info!(
            "Created study session {} ({} topics, subject {})",
            session.id,
            session.topics.len(),
            session.subject
        );
        Ok(SessionDto::from(&session))
    }

    pub async fn get_session(&self, id: &str) -> AppResult<SessionDto> {
        let session = self.load(id).await?;
        Ok(SessionDto::from(&session))
    }

    pub async fn rebuild_session(
        &self,
        id: &str,
        request: SyllabusRequest,
    ) -> AppResult<SessionDto> {
        request.check_size(self.max_syllabus_bytes)?;

        let mut session = self.load(id).await?;
        session.rebuild(&request.syllabus_text);
        let session = self.repository.update(session).await?;

        log::info!(
            "Rebuilt study session {} ({} topics, subject {})",
            session.id,
            session.topics.len(),
            session.subject
        );
        Ok(SessionDto::from(&session))
    }

    pub async fn delete_session(&self, id: &str) -> AppResult<DeleteSessionResponse> {
        self.repository.delete(id).await?;
        Ok(DeleteSessionResponse {
            message: format!("Session '{}' deleted", id),
        })
    }

    pub async fn get_quiz(&self, id: &str, topic_index: usize) -> AppResult<TopicQuiz> {
        self.load(id).await?.resolve_questions(topic_index)
    }

    pub async fn get_hints(&self, id: &str, topic_index: usize) -> AppResult<TopicHints> {
        self.load(id).await?.resolve_hints(topic_index)
    }

    pub async fn submit_attempt(
        &self,
        id: &str,
        topic_index: usize,
        request: SubmitQuizAttemptRequest,
    ) -> AppResult<QuizAttempt> {
        request.validate()?;

        let mut session = self.load(id).await?;
        let quiz = session.resolve_questions(topic_index)?;
        let attempt =
            QuizAttemptService::grade_attempt(id, topic_index, &quiz, &request.answers)?;

        session.record_attempt(attempt.clone());
        self.repository.update(session).await?;

        log::info!(
            "Graded attempt for session {} topic {}: {}/{}",
            id,
            topic_index,
            attempt.score,
            attempt.total
        );
        Ok(attempt)
    }

    pub async fn get_progress(&self, id: &str) -> AppResult<StudyProgress> {
        Ok(self.load(id).await?.progress())
    }

    /// Stateless parse and classification; nothing is stored.
    pub fn preview(&self, request: SyllabusRequest) -> AppResult<ParsedSyllabusDto> {
        request.check_size(self.max_syllabus_bytes)?;

        Ok(ParsedSyllabusDto {
            subject: classify_subject(&request.syllabus_text),
            topics: parse_syllabus(&request.syllabus_text),
        })
    }
}
