use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        QuizAttempt, QuizQuestion, ResolvedTopicData, StudyProgress, SubjectCategory,
        TopicRecord,
    },
    services::study_plan::{build_study_plan, StudyPlan},
};

/// Session-scoped study context.
///
/// Owns the syllabus text a caller supplied together with everything derived
/// from it. Derived state is only ever replaced wholesale through
/// [`StudySession::rebuild`]; the resolve operations read the cache and
/// never mutate it. Graded attempts belong to the current topics and are
/// dropped on rebuild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudySession {
    pub id: String,
    pub source_text: String,
    pub subject: SubjectCategory,
    pub topics: Vec<TopicRecord>,
    pub resolved: BTreeMap<usize, ResolvedTopicData>,
    pub attempts: Vec<QuizAttempt>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicQuiz {
    pub topic_name: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicHints {
    pub topic_name: String,
    pub hints: Vec<String>,
}

impl StudySession {
    pub fn new(source_text: &str) -> Self {
        let StudyPlan {
            subject,
            topics,
            resolved,
        } = build_study_plan(source_text);
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            source_text: source_text.to_string(),
            subject,
            topics,
            resolved,
            attempts: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces the source text and every value derived from it.
    pub fn rebuild(&mut self, source_text: &str) {
        let StudyPlan {
            subject,
            topics,
            resolved,
        } = build_study_plan(source_text);

        self.source_text = source_text.to_string();
        self.subject = subject;
        self.topics = topics;
        self.resolved = resolved;
        self.attempts.clear();
        self.modified_at = Utc::now();
    }

    pub fn record_attempt(&mut self, attempt: QuizAttempt) {
        self.attempts.push(attempt);
        self.modified_at = Utc::now();
    }

    pub fn progress(&self) -> StudyProgress {
        StudyProgress::from_attempts(&self.attempts)
    }

    pub fn topic(&self, topic_index: usize) -> AppResult<&ResolvedTopicData> {
        self.resolved
            .get(&topic_index)
            .ok_or(AppError::TopicNotFound(topic_index))
    }

    pub fn resolve_questions(&self, topic_index: usize) -> AppResult<TopicQuiz> {
        let topic = self.topic(topic_index)?;
        Ok(TopicQuiz {
            topic_name: topic.name.clone(),
            questions: topic.questions.clone(),
        })
    }

    pub fn resolve_hints(&self, topic_index: usize) -> AppResult<TopicHints> {
        let topic = self.topic(topic_index)?;
        Ok(TopicHints {
            topic_name: topic.name.clone(),
            hints: topic.hints.clone(),
        })
    }
}
