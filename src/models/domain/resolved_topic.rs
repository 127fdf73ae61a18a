use crate::models::domain::QuizQuestion;

/// A topic record combined with its resolved questions and hints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTopicData {
    pub name: String,
    pub questions: Vec<QuizQuestion>,
    pub hints: Vec<String>,
    pub subtopics: Vec<String>,
    pub keywords: Vec<String>,
}
