use serde::{Deserialize, Serialize};

/// A single multiple-choice question with exactly one correct option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize, // index into `options`
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct,
            explanation: explanation.into(),
        }
    }

    /// Options are non-empty and `correct` points inside them.
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.correct < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question(correct: usize) -> QuizQuestion {
        QuizQuestion::new(
            "Which SQL command is used to retrieve data?",
            vec![
                "SELECT".to_string(),
                "INSERT".to_string(),
                "UPDATE".to_string(),
                "DELETE".to_string(),
            ],
            correct,
            "SELECT is used to query and retrieve data from database tables.",
        )
    }

    #[test]
    fn well_formed_question_has_correct_index_in_bounds() {
        let question = sample_question(0);
        assert!(question.is_well_formed());
    }

    #[test]
    fn out_of_range_correct_index_is_not_well_formed() {
        let question = sample_question(4);
        assert!(!question.is_well_formed());
    }

    #[test]
    fn question_without_options_is_not_well_formed() {
        let question = QuizQuestion::new("Empty?", vec![], 0, "");
        assert!(!question.is_well_formed());
    }
}
