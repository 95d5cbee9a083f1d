// File: src/core/resolver.rs
use crate::core::knowledge::{KnowledgeBase, KnowledgeEntry};
use crate::core::types::{Message, Sender};

/// Prior turns needed before an unmatched question gets the
/// "connect topics" reply instead of the generic default.
const CONNECT_AFTER_TURNS: usize = 3;
/// Number of topic phrases listed in the default reply.
const DEFAULT_TOPIC_SAMPLE: usize = 6;

/// Which layer of the resolver produced a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    Quick,
    Topic { topic: &'static str, depth: usize },
    Route { trigger: &'static str, topic: &'static str },
    Connect,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub source: ResolutionSource,
}

/// Deterministic reply selection over a read-only knowledge base.
///
/// Layers are tried in order and the first hit wins:
/// quick responses, topic phrases (with progressive depth), keyword routes,
/// the "connect topics" reply for longer conversations, and the default.
#[derive(Debug, Clone, Copy)]
pub struct ResponseResolver<'kb> {
    kb: &'kb KnowledgeBase,
}

impl ResponseResolver<'static> {
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }
}

impl<'kb> ResponseResolver<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Picks a reply for `input` given the messages that came before it.
    /// Never fails; unmatched input gets a fallback reply.
    pub fn resolve(&self, input: &str, history: &[Message]) -> String {
        self.resolve_detailed(input, history).reply
    }

    pub fn resolve_detailed(&self, input: &str, history: &[Message]) -> Resolution {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return self.default_reply();
        }

        if let Some(reply) = self.quick_response(&normalized) {
            return Resolution {
                reply: reply.to_string(),
                source: ResolutionSource::Quick,
            };
        }

        if let Some(entry) = self.kb.entries().iter().find(|e| topic_matches(e, &normalized)) {
            let depth = self.prior_references(entry, history);
            tracing::debug!(topic = entry.topic, depth, "topic match");
            return Resolution {
                reply: entry.variant(depth).to_string(),
                source: ResolutionSource::Topic {
                    topic: entry.topic,
                    depth: depth.min(entry.variants.len() - 1),
                },
            };
        }

        if let Some(route) = self.kb.routes().iter().find(|r| normalized.contains(r.trigger)) {
            return match self.kb.entry(route.topic) {
                Some(entry) => Resolution {
                    reply: entry.variant(0).to_string(),
                    source: ResolutionSource::Route {
                        trigger: route.trigger,
                        topic: entry.topic,
                    },
                },
                None => {
                    tracing::warn!(trigger = route.trigger, topic = route.topic, "keyword route points at a missing topic");
                    self.default_reply()
                }
            };
        }

        if history.len() > CONNECT_AFTER_TURNS {
            return self.connect_reply(history.len());
        }

        self.default_reply()
    }

    /// Triggers match whole words only, so "hi" never fires inside "which".
    fn quick_response(&self, normalized: &str) -> Option<&'static str> {
        let input_words = tokenize(normalized);
        self.kb
            .quick_responses()
            .iter()
            .find(|quick| {
                quick.triggers.iter().any(|trigger| {
                    normalized == *trigger || contains_word_run(&input_words, &tokenize(trigger))
                })
            })
            .map(|quick| quick.reply)
    }

    /// Topic a message is about, through a direct topic match or a keyword
    /// route. Dangling routes point nowhere.
    fn topic_of(&self, normalized: &str) -> Option<&'static str> {
        if let Some(entry) = self.kb.entries().iter().find(|e| topic_matches(e, normalized)) {
            return Some(entry.topic);
        }
        self.kb
            .routes()
            .iter()
            .find(|r| normalized.contains(r.trigger))
            .and_then(|r| self.kb.entry(r.topic))
            .map(|entry| entry.topic)
    }

    /// Prior user messages that were about the same topic.
    fn prior_references(&self, entry: &KnowledgeEntry, history: &[Message]) -> usize {
        history
            .iter()
            .filter(|msg| msg.sender == Sender::User && !msg.is_typing())
            .filter(|msg| self.topic_of(&msg.content.trim().to_lowercase()) == Some(entry.topic))
            .count()
    }

    fn connect_reply(&self, turns: usize) -> Resolution {
        let topics: Vec<&str> = self.kb.topics().collect();
        if topics.is_empty() {
            return self.default_reply();
        }
        let topic = topics[turns % topics.len()];
        Resolution {
            reply: format!(
                "We've covered a lot of ground together! 🌍 I don't have a specific answer for that one, but it might connect to {topic}. Want to explore how they relate, or ask me about something else?"
            ),
            source: ResolutionSource::Connect,
        }
    }

    fn default_reply(&self) -> Resolution {
        let sample: Vec<&str> = self.kb.topics().take(DEFAULT_TOPIC_SAMPLE).collect();
        let list = if sample.is_empty() {
            "the environment".to_string()
        } else {
            sample.join(", ")
        };
        Resolution {
            reply: format!(
                "That's a fantastic environmental question! I can help with topics like {list}, and much more. Try asking me about one of those! 🌱🤖"
            ),
            source: ResolutionSource::Default,
        }
    }
}

/// A topic matches when every word of its phrase appears in the input, or
/// the phrase itself appears (with or without spaces).
fn topic_matches(entry: &KnowledgeEntry, normalized: &str) -> bool {
    if entry.words().all(|word| normalized.contains(word)) || normalized.contains(entry.topic) {
        return true;
    }
    let squashed_topic: String = entry.topic.split_whitespace().collect();
    let squashed_input: String = normalized.split_whitespace().collect();
    squashed_input.contains(&squashed_topic)
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_word_run(haystack: &[&str], needle: &[&str]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::knowledge::{KeywordRoute, QuickResponse};
    use chrono::Utc;

    fn user(text: &str) -> Message {
        Message::new(text, Sender::User, Utc::now())
    }

    fn companion(text: &str) -> Message {
        Message::new(text, Sender::Companion, Utc::now())
    }

    #[test]
    fn test_every_topic_phrase_returns_its_first_variant() {
        let resolver = ResponseResolver::builtin();
        for entry in resolver.knowledge().entries() {
            assert_eq!(
                resolver.resolve(entry.topic, &[]),
                entry.variants[0],
                "topic {:?}",
                entry.topic
            );
        }
    }

    #[test]
    fn test_repeated_topic_clamps_to_last_variant() {
        let resolver = ResponseResolver::builtin();
        for entry in resolver.knowledge().entries() {
            let mut history = Vec::new();
            let n = entry.variants.len();
            for i in 0..n + 5 {
                let resolution = resolver.resolve_detailed(entry.topic, &history);
                assert_eq!(resolution.reply, entry.variants[i.min(n - 1)]);
                history.push(user(entry.topic));
                history.push(companion(&resolution.reply));
            }
        }
    }

    #[test]
    fn test_blank_input_gets_default_reply() {
        let resolver = ResponseResolver::builtin();
        let long_history: Vec<Message> = (0..10).map(|i| user(&format!("turn {i}"))).collect();
        for input in ["", "   "] {
            assert_eq!(resolver.resolve_detailed(input, &[]).source, ResolutionSource::Default);
            assert_eq!(
                resolver.resolve_detailed(input, &long_history).source,
                ResolutionSource::Default
            );
        }
    }

    #[test]
    fn test_quick_response_short_circuits() {
        let resolver = ResponseResolver::builtin();
        let greeting = resolver.knowledge().quick_responses()[0].reply;
        assert_eq!(resolver.resolve("hello there", &[]), greeting);
        assert_eq!(resolver.resolve("Hi, what is solar energy?", &[]), greeting);
    }

    #[test]
    fn test_quick_triggers_match_whole_words_only() {
        let resolver = ResponseResolver::builtin();
        let resolution = resolver.resolve_detailed("which one is greener?", &[]);
        assert_ne!(resolution.source, ResolutionSource::Quick);
    }

    #[test]
    fn test_quick_response_beats_matching_topic() {
        let kb = KnowledgeBase::new(
            &[KnowledgeEntry { topic: "hello", variants: &["topic reply"] }],
            &[],
            &[QuickResponse { triggers: &["hello"], reply: "canned" }],
        );
        let resolver = ResponseResolver::new(&kb);
        assert_eq!(resolver.resolve("hello world", &[]), "canned");
    }

    #[test]
    fn test_topic_words_match_in_any_order() {
        let resolver = ResponseResolver::builtin();
        let resolution = resolver.resolve_detailed("is energy from the sun (solar) worth it?", &[]);
        assert_eq!(
            resolution.source,
            ResolutionSource::Topic { topic: "solar energy", depth: 0 }
        );
    }

    #[test]
    fn test_topic_matches_without_spaces() {
        let resolver = ResponseResolver::builtin();
        let resolution = resolver.resolve_detailed("#netzero", &[]);
        assert_eq!(resolution.source, ResolutionSource::Topic { topic: "net zero", depth: 0 });
    }

    #[test]
    fn test_progressive_depth_clamps_with_two_variants() {
        let kb = KnowledgeBase::new(
            &[KnowledgeEntry { topic: "solar energy", variants: &["intro", "detail"] }],
            &[KeywordRoute { trigger: "solar", topic: "solar energy" }],
            &[],
        );
        let resolver = ResponseResolver::new(&kb);
        let history = vec![
            user("what about solar?"),
            companion("intro"),
            user("more solar please"),
            companion("detail"),
        ];
        let resolution = resolver.resolve_detailed("tell me about solar energy", &history);
        assert_eq!(resolution.reply, "detail");
        assert_eq!(resolution.source, ResolutionSource::Topic { topic: "solar energy", depth: 1 });
    }

    #[test]
    fn test_companion_messages_do_not_count_toward_depth() {
        let resolver = ResponseResolver::builtin();
        let history = vec![companion("wind energy is great"), companion("wind wind wind")];
        let resolution = resolver.resolve_detailed("wind energy", &history);
        assert_eq!(resolution.source, ResolutionSource::Topic { topic: "wind energy", depth: 0 });
    }

    #[test]
    fn test_shared_words_do_not_carry_depth_across_topics() {
        let resolver = ResponseResolver::builtin();
        let history = vec![
            user("What is renewable energy?"),
            companion("Renewable energy comes from natural sources."),
        ];
        let resolution = resolver.resolve_detailed("What are the benefits of solar energy?", &history);
        assert_eq!(
            resolution.source,
            ResolutionSource::Topic { topic: "solar energy", depth: 0 }
        );
    }

    #[test]
    fn test_routed_mentions_count_toward_depth() {
        let resolver = ResponseResolver::builtin();
        let history = vec![user("what about solar?")];
        let resolution = resolver.resolve_detailed("solar energy", &history);
        assert_eq!(
            resolution.source,
            ResolutionSource::Topic { topic: "solar energy", depth: 1 }
        );
    }

    #[test]
    fn test_keyword_route_returns_first_variant_only() {
        let resolver = ResponseResolver::builtin();
        let ev = resolver.knowledge().entry("electric vehicles").unwrap();
        let history = vec![user("ev range?"), user("ev charging?")];
        let resolution = resolver.resolve_detailed("tell me about ev batteries", &history);
        assert_eq!(resolution.reply, ev.variants[0]);
        assert_eq!(
            resolution.source,
            ResolutionSource::Route { trigger: "ev", topic: "electric vehicles" }
        );
    }

    #[test]
    fn test_singular_phrase_falls_through_to_route() {
        let resolver = ResponseResolver::builtin();
        let resolution = resolver.resolve_detailed("is an electric vehicle worth it", &[]);
        assert_eq!(
            resolution.source,
            ResolutionSource::Route { trigger: "electric", topic: "electric vehicles" }
        );
    }

    #[test]
    fn test_carbon_routes_before_car() {
        let resolver = ResponseResolver::builtin();
        let resolution = resolver.resolve_detailed("what is carbon?", &[]);
        assert_eq!(
            resolution.source,
            ResolutionSource::Route { trigger: "carbon", topic: "carbon footprint" }
        );
    }

    #[test]
    fn test_dangling_route_degrades_to_default() {
        let kb = KnowledgeBase::new(
            &[KnowledgeEntry { topic: "wind energy", variants: &["wind"] }],
            &[KeywordRoute { trigger: "tidal", topic: "ocean energy" }],
            &[],
        );
        let resolver = ResponseResolver::new(&kb);
        let history: Vec<Message> = (0..6).map(|i| user(&format!("q{i}"))).collect();
        let resolution = resolver.resolve_detailed("tidal power?", &history);
        assert_eq!(resolution.source, ResolutionSource::Default);
        assert!(resolution.reply.contains("wind energy"));
    }

    #[test]
    fn test_connect_reply_after_long_history() {
        let resolver = ResponseResolver::builtin();
        let short: Vec<Message> = (0..3).map(|i| user(&format!("q{i}"))).collect();
        let long: Vec<Message> = (0..4).map(|i| user(&format!("q{i}"))).collect();
        assert_eq!(resolver.resolve_detailed("tell me a joke", &short).source, ResolutionSource::Default);
        let resolution = resolver.resolve_detailed("tell me a joke", &long);
        assert_eq!(resolution.source, ResolutionSource::Connect);
        assert!(!resolution.reply.is_empty());
    }

    #[test]
    fn test_default_reply_lists_topics() {
        let resolver = ResponseResolver::builtin();
        let reply = resolver.resolve("tell me a joke", &[]);
        assert!(reply.contains("renewable energy"));
        assert!(reply.contains("wind energy"));
    }

    #[test]
    fn test_sample_questions_all_get_knowledge_replies() {
        let resolver = ResponseResolver::builtin();
        for question in crate::core::knowledge::sample_questions() {
            let source = resolver.resolve_detailed(question, &[]).source;
            assert!(
                matches!(source, ResolutionSource::Topic { depth: 0, .. }),
                "{question:?} resolved via {source:?}"
            );
        }
    }

    #[test]
    fn test_resolve_does_not_mutate_history() {
        let resolver = ResponseResolver::builtin();
        let history = vec![user("solar?")];
        let before = history.clone();
        let _ = resolver.resolve("solar energy", &history);
        assert_eq!(history, before);
    }
}
