use serde::{Deserialize, Serialize};

/// A parsed unit of study material.
///
/// `index` is the zero-based position in parse order and doubles as the
/// display order. Records are immutable once the parser returns them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicRecord {
    pub index: usize,
    pub name: String,
    pub subtopics: Vec<String>,
    pub keywords: Vec<String>,
}

impl TopicRecord {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            subtopics: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Appends a subtopic line and the keywords split out of it on commas
    /// and semicolons.
    pub fn push_subtopic(&mut self, subtopic: impl Into<String>) {
        let subtopic = subtopic.into();
        self.keywords.extend(
            subtopic
                .split([',', ';'])
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        );
        self.subtopics.push(subtopic);
    }
}
