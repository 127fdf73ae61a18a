use crate::models::domain::SubjectCategory;

/// Evaluated top to bottom; the first rule with a matching keyword wins.
///
/// "equation" appears under both science and mathematics. Science is checked
/// first, so text whose only signal is "equation" classifies as science.
/// The ordering is kept as found rather than guessing a different intent.
const SUBJECT_RULES: &[(SubjectCategory, &[&str])] = &[
    (
        SubjectCategory::Database,
        &["database", "sql", "dbms", "normalization", "relational"],
    ),
    (
        SubjectCategory::Programming,
        &["programming", "code", "function", "variable", "algorithm"],
    ),
    (
        SubjectCategory::Science,
        &["physics", "chemistry", "biology", "formula", "equation"],
    ),
    (
        SubjectCategory::Mathematics,
        &["algebra", "calculus", "geometry", "mathematics", "equation"],
    ),
];

/// Case-insensitive substring classification of raw syllabus text.
pub fn classify_subject(text: &str) -> SubjectCategory {
    let text = text.to_lowercase();

    SUBJECT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(subject, _)| *subject)
        .unwrap_or(SubjectCategory::Default)
}
