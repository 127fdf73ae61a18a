pub mod hint_generator;
pub mod question_resolver;
pub mod quiz_attempt_service;
pub mod study_plan;
pub mod study_session_service;
pub mod subject_classifier;
pub mod syllabus_parser;
