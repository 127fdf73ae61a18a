//! Question resolution for a single topic.
//!
//! Resolution order, first success wins:
//! 1. a curated bank entry whose canonical name matches the topic name,
//! 2. questions synthesized from the subject's templates,
//! 3. one generic fallback question.
//!
//! The result is never empty and never longer than
//! [`MAX_QUESTIONS_PER_TOPIC`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{
    constants::{
        question_bank::{question_bank, BankTopic},
        question_templates::{
            question_templates, QuestionTemplate, TemplateKind, ACRONYM_PLACEHOLDER,
            TOPIC_PLACEHOLDER,
        },
    },
    models::domain::{QuizQuestion, SubjectCategory, TopicRecord},
};

pub const MAX_QUESTIONS_PER_TOPIC: usize = 5;
pub const MAX_TEMPLATE_QUESTIONS: usize = 3;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[a-z_]+\}").expect("PLACEHOLDER is a valid regex pattern"));

/// Failure to build one question from a template. Recovered by skipping
/// that question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template '{template}' has unresolved placeholder {placeholder} for topic '{topic}'")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
        topic: String,
    },
}

pub fn resolve_questions(topic: &TopicRecord, subject: SubjectCategory) -> Vec<QuizQuestion> {
    let templates = match question_templates(subject) {
        [] => question_templates(SubjectCategory::Default),
        templates => templates,
    };

    resolve_from_tables(&topic.name, subject, question_bank(subject), templates)
}

/// Resolution against explicit bank and template tables.
fn resolve_from_tables(
    topic_name: &str,
    subject: SubjectCategory,
    bank: &[BankTopic],
    templates: &[QuestionTemplate],
) -> Vec<QuizQuestion> {
    let mut questions = match match_bank_topic(topic_name, bank) {
        Some(bank_topic) => {
            log::debug!(
                "Topic '{}' matched {} bank entry '{}'",
                topic_name,
                subject,
                bank_topic.name
            );
            bank_topic.to_questions()
        }
        None => synthesize_questions(topic_name, subject, templates),
    };

    if questions.is_empty() {
        questions.push(fallback_question(topic_name));
    }

    questions.truncate(MAX_QUESTIONS_PER_TOPIC);
    questions
}

/// First bank entry where either name contains the other, ignoring case.
fn match_bank_topic<'a>(topic_name: &str, bank: &'a [BankTopic]) -> Option<&'a BankTopic> {
    let topic_name = topic_name.to_lowercase();

    bank.iter().find(|bank_topic| {
        let key = bank_topic.name.to_lowercase();
        topic_name.contains(&key) || key.contains(&topic_name)
    })
}

fn synthesize_questions(
    topic_name: &str,
    subject: SubjectCategory,
    templates: &[QuestionTemplate],
) -> Vec<QuizQuestion> {
    templates
        .iter()
        .take(MAX_TEMPLATE_QUESTIONS)
        .filter_map(|template| match question_from_template(template, topic_name, subject) {
            Ok(question) => Some(question),
            Err(err) => {
                log::warn!("Skipping template question: {}", err);
                None
            }
        })
        .collect()
}

/// Builds one question from `template`. The correct option is always
/// index 0.
pub fn question_from_template(
    template: &QuestionTemplate,
    topic_name: &str,
    subject: SubjectCategory,
) -> Result<QuizQuestion, TemplateError> {
    let acronym = derive_acronym(topic_name);

    for placeholder in PLACEHOLDER.find_iter(template.template) {
        let resolvable = match placeholder.as_str() {
            TOPIC_PLACEHOLDER => true,
            ACRONYM_PLACEHOLDER => acronym.is_some(),
            _ => false,
        };
        if !resolvable {
            return Err(TemplateError::UnresolvedPlaceholder {
                template: template.template.to_string(),
                placeholder: placeholder.as_str().to_string(),
                topic: topic_name.to_string(),
            });
        }
    }

    let mut text = template.template.replacen(TOPIC_PLACEHOLDER, topic_name, 1);
    if let Some(acronym) = acronym {
        text = text.replacen(ACRONYM_PLACEHOLDER, &acronym, 1);
    }

    Ok(QuizQuestion::new(
        text,
        template_options(template.kind, topic_name, subject),
        0,
        format!("{topic_name} is an important topic that requires thorough understanding."),
    ))
}

fn template_options(kind: TemplateKind, topic_name: &str, subject: SubjectCategory) -> Vec<String> {
    match kind {
        TemplateKind::Definition => vec![
            format!("{topic_name} is a key concept in {subject}"),
            format!("{topic_name} is not related to this subject"),
            format!("{topic_name} is only theoretical"),
            format!("{topic_name} is outdated"),
        ],
        TemplateKind::Characteristic => vec![
            "It is fundamental to understanding the subject".to_string(),
            "It has no practical applications".to_string(),
            "It is only used in research".to_string(),
            "It is being phased out".to_string(),
        ],
        TemplateKind::Purpose => vec![
            "To provide essential knowledge for the subject".to_string(),
            "To make the subject more difficult".to_string(),
            "To confuse students".to_string(),
            "To fill curriculum requirements".to_string(),
        ],
        TemplateKind::Acronym
        | TemplateKind::Concept
        | TemplateKind::Syntax
        | TemplateKind::Formula => vec![
            format!("Understanding {topic_name} involves studying its key concepts and applications"),
            format!("{topic_name} is not important"),
            format!("{topic_name} is optional"),
            format!("{topic_name} is deprecated"),
        ],
    }
}

/// Uppercase initials of a multi-word name ("Structured Query Language" ->
/// "SQL"). Single words have no meaningful acronym.
fn derive_acronym(topic_name: &str) -> Option<String> {
    let initials: String = topic_name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect();

    (topic_name.split_whitespace().count() >= 2 && initials.chars().count() >= 2)
        .then_some(initials)
}

pub fn fallback_question(topic_name: &str) -> QuizQuestion {
    QuizQuestion::new(
        format!("What is the main concept of {topic_name}?"),
        vec![
            format!("{topic_name} is a fundamental concept in this subject"),
            format!("{topic_name} is not relevant to this topic"),
            format!("{topic_name} is only used in advanced applications"),
            format!("{topic_name} is outdated and no longer used"),
        ],
        0,
        format!(
            "{topic_name} is an important topic that requires understanding of its core concepts and applications."
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::question_bank::BankQuestion;

    fn topic(name: &str) -> TopicRecord {
        TopicRecord::new(0, name)
    }

    fn assert_valid(questions: &[QuizQuestion]) {
        assert!(!questions.is_empty());
        assert!(questions.len() <= MAX_QUESTIONS_PER_TOPIC);
        assert!(questions.iter().all(QuizQuestion::is_well_formed));
    }

    #[test]
    fn sql_topic_returns_bank_questions_verbatim() {
        let questions = resolve_questions(&topic("SQL"), SubjectCategory::Database);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Which SQL command is used to retrieve data?");
        assert_eq!(questions[0].options, vec!["SELECT", "INSERT", "UPDATE", "DELETE"]);
        assert_eq!(questions[1].question, "What does the WHERE clause do in SQL?");
        assert_valid(&questions);
    }

    #[test]
    fn bank_match_works_in_either_direction() {
        let longer = resolve_questions(&topic("Advanced SQL Queries"), SubjectCategory::Database);
        assert_eq!(longer[0].question, "Which SQL command is used to retrieve data?");

        let shorter = resolve_questions(&topic("database"), SubjectCategory::Database);
        assert_eq!(shorter[0].question, "What is a Database Management System (DBMS)?");
        assert_eq!(shorter[1].correct, 2);
    }

    #[test]
    fn first_matching_bank_entry_wins_without_merging() {
        let questions =
            resolve_questions(&topic("SQL and Normalization"), SubjectCategory::Database);

        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| !q.question.contains("normalization")));
    }

    #[test]
    fn unmatched_default_topic_uses_default_templates() {
        let questions = resolve_questions(&topic("Quantum Foo"), SubjectCategory::Default);

        let texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "What is Quantum Foo?",
                "Which of the following is a key characteristic of Quantum Foo?",
                "What is the main purpose of Quantum Foo?",
            ]
        );
        assert!(questions.iter().all(|q| q.correct == 0 && q.options.len() == 4));
        assert_eq!(questions[0].options[0], "Quantum Foo is a key concept in default");
    }

    #[test]
    fn mathematics_without_bank_match_falls_back_to_default_templates() {
        let questions = resolve_questions(&topic("Trigonometry"), SubjectCategory::Mathematics);

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].question, "What is Trigonometry?");
        assert_eq!(questions[0].options[0], "Trigonometry is a key concept in mathematics");
    }

    #[test]
    fn acronym_template_uses_initials_of_multi_word_topics() {
        let questions =
            resolve_questions(&topic("Entity Relationship Model"), SubjectCategory::Database);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What does ERM stand for?");
        assert_eq!(
            questions[0].options[0],
            "Understanding Entity Relationship Model involves studying its key concepts and applications"
        );
        assert_eq!(
            questions[1].question,
            "In Entity Relationship Model, which statement is correct?"
        );
    }

    #[test]
    fn acronym_template_is_skipped_for_single_word_topics() {
        let questions = resolve_questions(&topic("Indexing"), SubjectCategory::Database);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "In Indexing, which statement is correct?");
        assert_valid(&questions);
    }

    #[test]
    fn unresolved_placeholder_is_a_template_error() {
        let template = QuestionTemplate {
            template: "What does {acronym} stand for?",
            kind: TemplateKind::Acronym,
        };

        let err = question_from_template(&template, "Indexing", SubjectCategory::Database)
            .expect_err("single word has no acronym");
        assert!(matches!(err, TemplateError::UnresolvedPlaceholder { ref placeholder, .. } if placeholder == "{acronym}"));

        let unknown = QuestionTemplate {
            template: "Explain {concept} in {topic}",
            kind: TemplateKind::Concept,
        };
        assert!(question_from_template(&unknown, "Joins", SubjectCategory::Database).is_err());
    }

    #[test]
    fn braces_in_topic_name_do_not_fail_substitution() {
        let template = QuestionTemplate {
            template: "What is {topic}?",
            kind: TemplateKind::Definition,
        };

        let question = question_from_template(&template, "{weird}", SubjectCategory::Default)
            .expect("topic text is not a template placeholder");
        assert_eq!(question.question, "What is {weird}?");
    }

    #[test]
    fn fallback_question_has_four_options_and_first_is_correct() {
        let question = fallback_question("Optics");

        assert_eq!(question.question, "What is the main concept of Optics?");
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.correct, 0);
        assert!(question.is_well_formed());
    }

    const ACRONYM_ONLY: &[QuestionTemplate] = &[
        QuestionTemplate {
            template: "What does {acronym} stand for?",
            kind: TemplateKind::Acronym,
        },
        QuestionTemplate {
            template: "Expand {acronym} in full.",
            kind: TemplateKind::Acronym,
        },
    ];

    const fn numbered(question: &'static str) -> BankQuestion {
        BankQuestion {
            question,
            options: &["yes", "no"],
            correct: 0,
            explanation: "",
        }
    }

    const SEVEN_QUESTION_BANK: &[BankTopic] = &[BankTopic {
        name: "Optics",
        questions: &[
            numbered("Q1"),
            numbered("Q2"),
            numbered("Q3"),
            numbered("Q4"),
            numbered("Q5"),
            numbered("Q6"),
            numbered("Q7"),
        ],
    }];

    #[test]
    fn all_failing_templates_still_yield_the_fallback_question() {
        let questions =
            resolve_from_tables("Indexing", SubjectCategory::Database, &[], ACRONYM_ONLY);

        assert_eq!(questions, vec![fallback_question("Indexing")]);
    }

    #[test]
    fn empty_template_table_yields_the_fallback_question() {
        let questions = resolve_from_tables("Optics", SubjectCategory::Science, &[], &[]);

        assert_eq!(questions, vec![fallback_question("Optics")]);
    }

    #[test]
    fn bank_entries_are_truncated_to_five_in_order() {
        let questions = resolve_from_tables(
            "Geometric Optics",
            SubjectCategory::Science,
            SEVEN_QUESTION_BANK,
            &[],
        );

        let texts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["Q1", "Q2", "Q3", "Q4", "Q5"]);
    }

    #[test]
    fn every_subject_yields_valid_questions() {
        let subjects = [
            SubjectCategory::Database,
            SubjectCategory::Programming,
            SubjectCategory::Mathematics,
            SubjectCategory::Science,
            SubjectCategory::Default,
        ];
        for subject in subjects {
            for name in ["", "X", "Calculus", "Loops and Recursion", "CHEMISTRY"] {
                assert_valid(&resolve_questions(&topic(name), subject));
            }
        }
    }
}
