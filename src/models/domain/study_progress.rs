use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::QuizAttempt;

/// Latest result for one attempted topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicProgress {
    pub topic_index: usize,
    pub topic_name: String,
    pub percentage: u32,
    pub attempts: usize,
    pub last_attempt_at: DateTime<Utc>,
}

/// Progress summary over every attempted topic of a session.
///
/// A topic's progress is its most recent attempt; earlier attempts only
/// count toward `attempts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudyProgress {
    pub total_progress: f64,
    pub topics_studied: usize,
    pub last_activity: Option<DateTime<Utc>>,
    pub topics: Vec<TopicProgress>,
}

impl StudyProgress {
    pub fn from_attempts(attempts: &[QuizAttempt]) -> Self {
        let mut by_topic: BTreeMap<usize, TopicProgress> = BTreeMap::new();

        for attempt in attempts {
            by_topic
                .entry(attempt.topic_index)
                .and_modify(|progress| {
                    progress.attempts += 1;
                    if attempt.submitted_at >= progress.last_attempt_at {
                        progress.percentage = attempt.percentage;
                        progress.last_attempt_at = attempt.submitted_at;
                    }
                })
                .or_insert_with(|| TopicProgress {
                    topic_index: attempt.topic_index,
                    topic_name: attempt.topic_name.clone(),
                    percentage: attempt.percentage,
                    attempts: 1,
                    last_attempt_at: attempt.submitted_at,
                });
        }

        let topics: Vec<TopicProgress> = by_topic.into_values().collect();
        let total_progress = if topics.is_empty() {
            0.0
        } else {
            topics.iter().map(|t| f64::from(t.percentage)).sum::<f64>() / topics.len() as f64
        };

        Self {
            total_progress,
            topics_studied: topics.len(),
            last_activity: topics.iter().map(|t| t.last_attempt_at).max(),
            topics,
        }
    }
}
