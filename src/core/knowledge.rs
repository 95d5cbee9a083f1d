// File: src/core/knowledge.rs
use crate::core::tables;
use std::sync::OnceLock;

/// A topic phrase with its reply variants, ordered from introductory to
/// more detailed.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub topic: &'static str,
    pub variants: &'static [&'static str],
}

impl KnowledgeEntry {
    /// Whitespace-delimited words of the topic phrase.
    pub fn words(&self) -> impl Iterator<Item = &'static str> {
        self.topic.split_whitespace()
    }

    /// Variant for the given depth, clamped to the last one.
    pub fn variant(&self, depth: usize) -> &'static str {
        let last = self.variants.len().saturating_sub(1);
        self.variants[depth.min(last)]
    }
}

/// A short substring trigger pointing at a knowledge topic.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRoute {
    pub trigger: &'static str,
    pub topic: &'static str,
}

/// Canned small-talk reply keyed by whole-word triggers.
#[derive(Debug, Clone, Copy)]
pub struct QuickResponse {
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

/// Read-only knowledge tables. Iteration order is the declaration order.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    routes: Vec<KeywordRoute>,
    quick: Vec<QuickResponse>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from explicit tables. Entries with no
    /// variants are dropped, since every entry must be able to answer.
    pub fn new(
        entries: &[KnowledgeEntry],
        routes: &[KeywordRoute],
        quick: &[QuickResponse],
    ) -> Self {
        let entries = entries
            .iter()
            .filter(|entry| {
                if entry.variants.is_empty() {
                    tracing::warn!(topic = entry.topic, "dropping knowledge entry with no variants");
                    false
                } else {
                    true
                }
            })
            .copied()
            .collect();
        Self {
            entries,
            routes: routes.to_vec(),
            quick: quick.to_vec(),
        }
    }

    /// The built-in tables, built once per process.
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let kb = KnowledgeBase::new(
                tables::KNOWLEDGE,
                tables::KEYWORD_ROUTES,
                tables::QUICK_RESPONSES,
            );
            for route in kb.dangling_routes() {
                tracing::warn!(trigger = route.trigger, topic = route.topic, "keyword route points at a missing topic");
            }
            kb
        })
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn routes(&self) -> &[KeywordRoute] {
        &self.routes
    }

    pub fn quick_responses(&self) -> &[QuickResponse] {
        &self.quick
    }

    pub fn topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.topic)
    }

    pub fn entry(&self, topic: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.topic == topic)
    }

    /// Routes whose target topic does not exist in this knowledge base.
    pub fn dangling_routes(&self) -> Vec<KeywordRoute> {
        self.routes
            .iter()
            .filter(|route| self.entry(route.topic).is_none())
            .copied()
            .collect()
    }
}

/// Starter questions offered to a new learner.
pub fn sample_questions() -> &'static [&'static str] {
    tables::SAMPLE_QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_no_dangling_routes() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.dangling_routes().is_empty(), "{:?}", kb.dangling_routes());
    }

    #[test]
    fn test_builtin_entries_are_unique_and_non_empty() {
        let kb = KnowledgeBase::builtin();
        let mut seen = std::collections::HashSet::new();
        for entry in kb.entries() {
            assert!(!entry.variants.is_empty(), "{} has no variants", entry.topic);
            assert!(seen.insert(entry.topic), "duplicate topic {}", entry.topic);
            assert_eq!(entry.topic, entry.topic.to_lowercase());
        }
        assert!(kb.entries().len() >= 20);
    }

    #[test]
    fn test_variant_clamps_to_last() {
        let entry = KnowledgeEntry {
            topic: "demo topic",
            variants: &["first", "second"],
        };
        assert_eq!(entry.variant(0), "first");
        assert_eq!(entry.variant(1), "second");
        assert_eq!(entry.variant(7), "second");
    }

    #[test]
    fn test_dangling_route_detected() {
        let kb = KnowledgeBase::new(
            &[KnowledgeEntry { topic: "wind energy", variants: &["wind"] }],
            &[
                KeywordRoute { trigger: "turbine", topic: "wind energy" },
                KeywordRoute { trigger: "tidal", topic: "ocean energy" },
            ],
            &[],
        );
        let dangling = kb.dangling_routes();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].trigger, "tidal");
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let kb = KnowledgeBase::new(
            &[
                KnowledgeEntry { topic: "empty", variants: &[] },
                KnowledgeEntry { topic: "full", variants: &["ok"] },
            ],
            &[],
            &[],
        );
        assert_eq!(kb.topics().collect::<Vec<_>>(), vec!["full"]);
    }
}
