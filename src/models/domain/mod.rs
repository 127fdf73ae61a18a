pub mod quiz_attempt;
pub mod quiz_question;
pub mod resolved_topic;
pub mod study_progress;
pub mod study_session;
pub mod subject;
pub mod topic;
pub use quiz_attempt::{QuizAttempt, QuizAttemptQuestion, QuizVerdict};
pub use quiz_question::QuizQuestion;
pub use resolved_topic::ResolvedTopicData;
pub use study_progress::{StudyProgress, TopicProgress};
pub use study_session::{StudySession, TopicHints, TopicQuiz};
pub use subject::SubjectCategory;
pub use topic::TopicRecord;
