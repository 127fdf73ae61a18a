use crate::models::domain::SubjectCategory;

/// Selects the option set a synthesized question is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    Definition,
    Characteristic,
    Purpose,
    Acronym,
    Concept,
    Syntax,
    Formula,
}

#[derive(Debug)]
pub struct QuestionTemplate {
    pub template: &'static str,
    pub kind: TemplateKind,
}

pub const TOPIC_PLACEHOLDER: &str = "{topic}";
pub const ACRONYM_PLACEHOLDER: &str = "{acronym}";

/// Templates registered for `subject`. Empty when the subject has none of
/// its own; callers fall back to the default set.
pub fn question_templates(subject: SubjectCategory) -> &'static [QuestionTemplate] {
    match subject {
        SubjectCategory::Default => DEFAULT_TEMPLATES,
        SubjectCategory::Database => DATABASE_TEMPLATES,
        SubjectCategory::Programming => PROGRAMMING_TEMPLATES,
        SubjectCategory::Science => SCIENCE_TEMPLATES,
        SubjectCategory::Mathematics => &[],
    }
}

const DEFAULT_TEMPLATES: &[QuestionTemplate] = &[
    QuestionTemplate {
        template: "What is {topic}?",
        kind: TemplateKind::Definition,
    },
    QuestionTemplate {
        template: "Which of the following is a key characteristic of {topic}?",
        kind: TemplateKind::Characteristic,
    },
    QuestionTemplate {
        template: "What is the main purpose of {topic}?",
        kind: TemplateKind::Purpose,
    },
];

const DATABASE_TEMPLATES: &[QuestionTemplate] = &[
    QuestionTemplate {
        template: "What does {acronym} stand for?",
        kind: TemplateKind::Acronym,
    },
    QuestionTemplate {
        template: "In {topic}, which statement is correct?",
        kind: TemplateKind::Concept,
    },
];

const PROGRAMMING_TEMPLATES: &[QuestionTemplate] = &[QuestionTemplate {
    template: "Which syntax is correct for {topic}?",
    kind: TemplateKind::Syntax,
}];

const SCIENCE_TEMPLATES: &[QuestionTemplate] = &[QuestionTemplate {
    template: "What is the formula for {topic}?",
    kind: TemplateKind::Formula,
}];
