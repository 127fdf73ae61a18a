use crate::models::domain::TopicRecord;

const MAX_HIGHLIGHTED_SUBTOPICS: usize = 3;

/// Five generic study hints for the topic, plus a line naming up to three
/// subtopics when the topic has any.
pub fn generate_hints(topic: &TopicRecord) -> Vec<String> {
    let name = &topic.name;
    let mut hints = vec![
        format!("💡 Focus on understanding the core concepts of {name}"),
        format!("📚 Study the practical applications of {name}"),
        format!("🔍 Look for real-world examples related to {name}"),
        format!("⚡ Practice problems and exercises on {name}"),
        format!("🎯 Connect {name} with other related topics"),
    ];

    if !topic.subtopics.is_empty() {
        let highlighted: Vec<&str> = topic
            .subtopics
            .iter()
            .take(MAX_HIGHLIGHTED_SUBTOPICS)
            .map(String::as_str)
            .collect();
        hints.push(format!("📝 Pay attention to: {}", highlighted.join(", ")));
    }

    hints
}
