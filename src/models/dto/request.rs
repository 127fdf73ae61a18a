use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Raw syllabus text. Empty text is accepted and produces no topics.
/// The byte limit is configured at runtime and checked by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct SyllabusRequest {
    pub syllabus_text: String,
}

impl SyllabusRequest {
    pub fn check_size(&self, max_bytes: usize) -> AppResult<()> {
        let size = self.syllabus_text.len();
        if size > max_bytes {
            return Err(AppError::ValidationError(format!(
                "syllabus_text: {} bytes exceeds the {} byte limit",
                size, max_bytes
            )));
        }
        Ok(())
    }
}

/// Selected option index per question, aligned with question order.
/// `None` leaves a question unanswered.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizAttemptRequest {
    #[validate(length(min = 1, max = 50))]
    pub answers: Vec<Option<usize>>,
}
