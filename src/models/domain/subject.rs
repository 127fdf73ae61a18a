use serde::{Deserialize, Serialize};

/// Coarse classification of syllabus content. Selects which question bank
/// and template set apply to a study session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    Database,
    Programming,
    Mathematics,
    Science,
    Default,
}

impl SubjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectCategory::Database => "database",
            SubjectCategory::Programming => "programming",
            SubjectCategory::Mathematics => "mathematics",
            SubjectCategory::Science => "science",
            SubjectCategory::Default => "default",
        }
    }
}

impl std::fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_category_serializes_lowercase() {
        let json = serde_json::to_string(&SubjectCategory::Database).expect("should serialize");
        assert_eq!(json, "\"database\"");

        let parsed: SubjectCategory =
            serde_json::from_str("\"mathematics\"").expect("should deserialize");
        assert_eq!(parsed, SubjectCategory::Mathematics);
    }

    #[test]
    fn subject_category_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<SubjectCategory>("\"history\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(SubjectCategory::Default.to_string(), "default");
        assert_eq!(SubjectCategory::Science.to_string(), "science");
    }
}
