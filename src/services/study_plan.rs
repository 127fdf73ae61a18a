use std::collections::BTreeMap;

use crate::{
    models::domain::{ResolvedTopicData, SubjectCategory, TopicRecord},
    services::{
        hint_generator::generate_hints, question_resolver::resolve_questions,
        subject_classifier::classify_subject, syllabus_parser::parse_syllabus,
    },
};

/// Everything derived from one syllabus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPlan {
    pub subject: SubjectCategory,
    pub topics: Vec<TopicRecord>,
    pub resolved: BTreeMap<usize, ResolvedTopicData>,
}

/// Runs parse, classify and per-topic resolution over `text`. Pure: no
/// I/O and no shared state.
pub fn build_study_plan(text: &str) -> StudyPlan {
    let topics = parse_syllabus(text);
    let subject = classify_subject(text);
    log::debug!("Detected subject type: {}", subject);

    let resolved = topics
        .iter()
        .map(|topic| {
            let data = ResolvedTopicData {
                name: topic.name.clone(),
                questions: resolve_questions(topic, subject),
                hints: generate_hints(topic),
                subtopics: topic.subtopics.clone(),
                keywords: topic.keywords.clone(),
            };
            (topic.index, data)
        })
        .collect();

    StudyPlan {
        subject,
        topics,
        resolved,
    }
}
