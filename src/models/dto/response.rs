use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{StudySession, SubjectCategory, TopicRecord};

#[derive(Debug, Clone, Serialize)]
pub struct TopicSummaryDto {
    pub index: usize,
    pub name: String,
    pub subtopics: Vec<String>,
    pub question_count: usize,
    pub hint_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub id: String,
    pub subject: SubjectCategory,
    pub topics: Vec<TopicSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&StudySession> for SessionDto {
    fn from(session: &StudySession) -> Self {
        let topics = session
            .topics
            .iter()
            .map(|topic| {
                let resolved = session.resolved.get(&topic.index);
                TopicSummaryDto {
                    index: topic.index,
                    name: topic.name.clone(),
                    subtopics: topic.subtopics.clone(),
                    question_count: resolved.map_or(0, |r| r.questions.len()),
                    hint_count: resolved.map_or(0, |r| r.hints.len()),
                }
            })
            .collect();

        SessionDto {
            id: session.id.clone(),
            subject: session.subject,
            topics,
            created_at: session.created_at,
            modified_at: session.modified_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedSyllabusDto {
    pub subject: SubjectCategory,
    pub topics: Vec<TopicRecord>,
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}
