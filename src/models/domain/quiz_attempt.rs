use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizVerdict {
    Great,        // 70% and above
    Good,         // 50% and above
    KeepStudying, // everything below
}

impl QuizVerdict {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 70 {
            QuizVerdict::Great
        } else if percentage >= 50 {
            QuizVerdict::Good
        } else {
            QuizVerdict::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            QuizVerdict::Great => "Great Job!",
            QuizVerdict::Good => "Good Effort!",
            QuizVerdict::KeepStudying => "Keep Studying!",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub session_id: String,
    pub topic_index: usize,
    pub topic_name: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub verdict: QuizVerdict,
    pub message: String,
    pub question_results: Vec<QuizAttemptQuestion>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttemptQuestion {
    pub question: String,
    pub selected_option: Option<usize>,
    pub correct_option: usize,
    pub is_correct: bool,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_tiers_follow_percentage_thresholds() {
        assert_eq!(QuizVerdict::from_percentage(100), QuizVerdict::Great);
        assert_eq!(QuizVerdict::from_percentage(70), QuizVerdict::Great);
        assert_eq!(QuizVerdict::from_percentage(69), QuizVerdict::Good);
        assert_eq!(QuizVerdict::from_percentage(50), QuizVerdict::Good);
        assert_eq!(QuizVerdict::from_percentage(49), QuizVerdict::KeepStudying);
        assert_eq!(QuizVerdict::from_percentage(0), QuizVerdict::KeepStudying);
    }

    #[test]
    fn verdict_serializes_snake_case() {
        let json = serde_json::to_string(&QuizVerdict::KeepStudying).expect("should serialize");
        assert_eq!(json, "\"keep_studying\"");
        assert_eq!(QuizVerdict::KeepStudying.message(), "Keep Studying!");
    }
}
