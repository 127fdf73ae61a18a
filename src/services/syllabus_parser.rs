//! Syllabus text parsing.
//!
//! Turns free-form, line-oriented syllabus text into ordered topic records.
//! Header lines open a topic, bullet or indented lines attach to the open
//! topic as subtopics, and anything else only matters when no topic is open.
//!
//! A bullet or indented line seen before any header is not dropped: it opens
//! a topic named by the whole trimmed line, so non-blank text always yields
//! at least one topic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::TopicRecord;

static NUMBERED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.").expect("NUMBERED_HEADER is a valid regex pattern")
});

static CAPS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][^a-z]*$").expect("CAPS_HEADER is a valid regex pattern")
});

static TITLE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z\s]+:?$").expect("TITLE_HEADER is a valid regex pattern")
});

static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-•]\s*").expect("BULLET is a valid regex pattern"));

static INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s{2,}").expect("INDENT is a valid regex pattern"));

static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.\s*").expect("ENUMERATION_PREFIX is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Header,
    Subtopic,
    Other,
}

/// `raw` is the untrimmed line; indentation is judged on it.
fn classify_line(raw: &str) -> LineKind {
    let trimmed = raw.trim();

    if NUMBERED_HEADER.is_match(trimmed)
        || CAPS_HEADER.is_match(trimmed)
        || TITLE_HEADER.is_match(trimmed)
    {
        LineKind::Header
    } else if BULLET.is_match(trimmed) || INDENT.is_match(raw) {
        LineKind::Subtopic
    } else {
        LineKind::Other
    }
}

fn clean_header(trimmed: &str) -> String {
    let name = ENUMERATION_PREFIX.replace(trimmed, "");
    name.strip_suffix(':').unwrap_or(&name).to_string()
}

fn strip_bullet(trimmed: &str) -> String {
    BULLET.replace(trimmed, "").into_owned()
}

/// Parses syllabus text into topic records in input order.
///
/// Blank and whitespace-only input yields an empty list. Index values are
/// exactly `0..n` in the order topics were opened.
pub fn parse_syllabus(text: &str) -> Vec<TopicRecord> {
    let mut topics = Vec::new();
    let mut current: Option<TopicRecord> = None;
    let mut next_index = 0;

    for raw in text.lines().filter(|line| !line.trim().is_empty()) {
        let trimmed = raw.trim();

        match (classify_line(raw), current.as_mut()) {
            (LineKind::Header, _) => {
                topics.extend(current.take());
                current = Some(TopicRecord::new(next_index, clean_header(trimmed)));
                next_index += 1;
            }
            (LineKind::Subtopic, Some(topic)) => topic.push_subtopic(strip_bullet(trimmed)),
            (LineKind::Other, Some(topic)) => {
                log::debug!("Ignoring stray line under topic '{}': {}", topic.name, trimmed);
            }
            // Nothing is open yet: the line names a topic verbatim.
            (_, None) => {
                current = Some(TopicRecord::new(next_index, trimmed));
                next_index += 1;
            }
        }
    }

    topics.extend(current);
    log::debug!("Parsed {} topics from syllabus", topics.len());
    topics
}
