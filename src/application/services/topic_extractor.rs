use regex::Regex;
use std::sync::LazyLock;

/// Literal marker the system prompt asks the model to end its reply with.
pub const TOPIC_MARKER: &str = "TOPIC_NAME:";

static TOPIC_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s){}(?P<topic>.*)\z", regex::escape(TOPIC_MARKER))).unwrap()
});

/// Reply text with the topic trailer split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReply {
    pub clean_text: String,
    pub topic: Option<String>,
}

/// Splits a `TOPIC_NAME:` trailer off a raw model reply.
///
/// The first marker wins. Everything from it to the end of the input is removed
/// from the body and, trimmed, becomes the topic. A marker followed only by
/// whitespace yields no topic.
pub fn extract_topic(raw_text: &str) -> ExtractedReply {
    match TOPIC_TRAILER.captures(raw_text) {
        Some(caps) => {
            let marker_start = caps.get(0).map(|m| m.start()).unwrap_or(raw_text.len());
            let topic = caps
                .name("topic")
                .map(|m| m.as_str().trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string);

            ExtractedReply {
                clean_text: raw_text[..marker_start].trim().to_string(),
                topic,
            }
        }
        None => ExtractedReply {
            clean_text: raw_text.trim().to_string(),
            topic: None,
        },
    }
}
