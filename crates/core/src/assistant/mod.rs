//! Rule-based learning assistant.
//!
//! Questions are matched to canned passages by keyword presence. Entries are
//! checked in declaration order and the first entry with any keyword found in
//! the lower-cased question wins, so overlapping keywords (e.g. "centrifugal")
//! resolve to the earlier topic.

mod knowledge;

pub use knowledge::{FALLBACK_PASSAGE, KNOWLEDGE_BASE};

/// One knowledge-base entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub topic: &'static str,
    /// Lower-case keywords; multi-word keywords match as phrases.
    pub keywords: &'static [&'static str],
    pub passage: &'static str,
}

impl KnowledgeEntry {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// The passage chosen for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response<'a> {
    /// Title of the entry that matched, `None` for the fallback.
    pub matched_topic: Option<&'a str>,
    pub passage: &'a str,
}

impl Response<'_> {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.matched_topic.is_none()
    }
}

/// Resolves free text to a knowledge-base passage.
#[derive(Debug, Clone, Copy)]
pub struct KeywordResponder {
    entries: &'static [KnowledgeEntry],
    fallback: &'static str,
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(KNOWLEDGE_BASE, FALLBACK_PASSAGE)
    }
}

impl KeywordResponder {
    #[must_use]
    pub fn new(entries: &'static [KnowledgeEntry], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    /// Returns the first matching passage, or the fallback.
    ///
    /// `_topic_hint` is the topic the user had selected. It is accepted so callers
    /// can pass it through, but it never changes which passage is returned.
    #[must_use]
    pub fn respond(&self, text: &str, _topic_hint: Option<&str>) -> Response<'static> {
        let lowered = text.to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.matches(&lowered))
            .map_or(
                Response {
                    matched_topic: None,
                    passage: self.fallback,
                },
                |entry| Response {
                    matched_topic: Some(entry.topic),
                    passage: entry.passage,
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cavitation_question_gets_cavitation_passage() {
        let responder = KeywordResponder::default();
        let response = responder.respond("what causes cavitation", Some("Safety Procedures"));

        assert_eq!(response.matched_topic, Some("Cavitation and Pump Safety"));
        assert!(response.passage.starts_with("Cavitation occurs when liquid pressure"));
    }

    #[test]
    fn unmatched_question_gets_fallback() {
        let responder = KeywordResponder::default();
        let response = responder.respond("hello", None);

        assert!(response.is_fallback());
        assert_eq!(response.passage, FALLBACK_PASSAGE);
    }

    #[test]
    fn matching_ignores_case() {
        let responder = KeywordResponder::default();
        let response = responder.respond("Explain NPSH please", None);
        assert_eq!(response.matched_topic, Some("Cavitation and Pump Safety"));

        let response = responder.respond("Where is the BEP?", None);
        assert_eq!(response.matched_topic, Some("Pump Types and Fundamentals"));
    }

    #[test]
    fn first_declared_entry_wins() {
        let responder = KeywordResponder::default();
        // "centrifugal" is a keyword of both pumps and compressors.
        let response = responder.respond("centrifugal compressor surge", None);
        assert_eq!(response.matched_topic, Some("Pump Types and Fundamentals"));

        // "pump" precedes "cavitation" in declaration order.
        let response = responder.respond("pump cavitation", None);
        assert_eq!(response.matched_topic, Some("Pump Types and Fundamentals"));
    }

    #[test]
    fn keywords_match_as_substrings() {
        let responder = KeywordResponder::default();
        let response = responder.respond("tell me about flowmeters", None);
        assert_eq!(response.matched_topic, Some("Measurement Devices"));

        let response = responder.respond("what is positive displacement?", None);
        assert_eq!(response.matched_topic, Some("Pump Types and Fundamentals"));
    }

    #[test]
    fn hint_never_changes_the_answer() {
        let responder = KeywordResponder::default();
        let with_hint = responder.respond("hello", Some("Performance Calculations"));
        assert!(with_hint.is_fallback());

        let a = responder.respond("lockout steps", Some("Measurement Devices"));
        let b = responder.respond("lockout steps", None);
        assert_eq!(a, b);
        assert_eq!(a.matched_topic, Some("Safety Procedures"));
    }

    #[test]
    fn every_seed_topic_has_an_entry() {
        let catalog = crate::catalog::Catalog::seeded().unwrap();
        for topic in catalog.list_topics() {
            assert!(
                KNOWLEDGE_BASE.iter().any(|entry| entry.topic == topic.title()),
                "missing entry for {}",
                topic.title()
            );
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for entry in KNOWLEDGE_BASE {
            for keyword in entry.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
