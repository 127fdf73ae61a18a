use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_attempt::{QuizAttempt, QuizAttemptQuestion, QuizVerdict};
use crate::models::domain::{QuizQuestion, TopicQuiz};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers against a topic's questions.
    ///
    /// `answers[i]` is the selected option for question `i`. Missing trailing
    /// answers count as unanswered.
    pub fn grade_attempt(
        session_id: &str,
        topic_index: usize,
        quiz: &TopicQuiz,
        answers: &[Option<usize>],
    ) -> AppResult<QuizAttempt> {
        if quiz.questions.is_empty() {
            return Err(AppError::ValidationError(
                "Quiz has no questions".to_string(),
            ));
        }
        if answers.len() > quiz.questions.len() {
            return Err(AppError::ValidationError(format!(
                "Received {} answers for {} questions",
                answers.len(),
                quiz.questions.len()
            )));
        }

        let question_results: Vec<QuizAttemptQuestion> = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, question)| Self::grade_question(question, answers.get(i).copied().flatten()))
            .collect();

        let score = question_results.iter().filter(|r| r.is_correct).count();
        let total = quiz.questions.len();
        let percentage = Self::percentage(score, total);
        let verdict = QuizVerdict::from_percentage(percentage);

        Ok(QuizAttempt {
            session_id: session_id.to_string(),
            topic_index,
            topic_name: quiz.topic_name.clone(),
            score,
            total,
            percentage,
            verdict,
            message: verdict.message().to_string(),
            question_results,
            submitted_at: Utc::now(),
        })
    }

    /// Out-of-range selections are simply wrong.
    fn grade_question(question: &QuizQuestion, selected: Option<usize>) -> QuizAttemptQuestion {
        QuizAttemptQuestion {
            question: question.question.clone(),
            selected_option: selected,
            correct_option: question.correct,
            is_correct: selected == Some(question.correct),
            explanation: question.explanation.clone(),
        }
    }

    fn percentage(score: usize, total: usize) -> u32 {
        ((score as f64 / total as f64) * 100.0).round() as u32
    }
}
