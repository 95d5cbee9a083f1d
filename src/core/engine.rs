use crate::config::EcoPalConfig;
use crate::core::context::Conversation;
use crate::core::resolver::{Resolution, ResolutionSource, ResponseResolver};
use crate::core::types::{LearnerProfile, Message, TopicKey};
use crate::error::{EcoPalError, Result};
use crate::exchange::{Exchange, ExchangeEvent};
use crate::learning::ProfileTracker;
use crate::persistence::{self, KeyValueStore, CONVERSATION_KEY};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::time::Instant;

/// Topic replies get the personalized prefix on every Nth question.
const PERSONALIZE_EVERY: u32 = 5;

/// What happened to a submitted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was appended.
    Ignored,
    /// The question was recorded and a reply is on its way.
    Scheduled(Resolution),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    TypingShown,
    ReplyDelivered(Message),
}

/// One chat session: owns the conversation, the learner profile, and the
/// pending reply, and writes both records back after every change.
pub struct EcoPalEngine<S: KeyValueStore + Clone> {
    resolver: ResponseResolver<'static>,
    tracker: ProfileTracker<S>,
    conversation: Conversation,
    exchange: Exchange,
    store: S,
    config: EcoPalConfig,
}

impl<S: KeyValueStore + Clone> EcoPalEngine<S> {
    /// Hydrates stored state and starts a new session for today.
    pub fn open(store: S, config: EcoPalConfig) -> Result<Self> {
        Self::open_on(store, config, Local::now().date_naive(), Utc::now())
    }

    pub fn open_on(store: S, config: EcoPalConfig, today: NaiveDate, now: DateTime<Utc>) -> Result<Self> {
        let mut tracker = ProfileTracker::load(store.clone());
        tracker.on_session_start_on(today, now)?;

        let mut conversation = persistence::load_conversation(&store)
            .map(Conversation::from_messages)
            .unwrap_or_default();
        // A placeholder left over from a previous run has no reply coming.
        conversation.clear_typing();
        if conversation.is_empty() {
            conversation = Conversation::with_opening(&tracker.greeting(), now);
        }

        let engine = Self {
            resolver: ResponseResolver::builtin(),
            tracker,
            conversation,
            exchange: Exchange::new(),
            store,
            config,
        };
        engine.persist_conversation()?;
        tracing::info!(messages = engine.conversation.len(), "chat session opened");
        Ok(engine)
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn profile(&self) -> &LearnerProfile {
        self.tracker.profile()
    }

    pub fn greeting(&self) -> String {
        self.tracker.greeting()
    }

    pub fn recommended_topics(&self) -> Vec<TopicKey> {
        self.tracker.recommended_topics()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.exchange.is_awaiting()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.exchange.next_deadline()
    }

    /// Records the learner's message and schedules the companion's reply.
    pub fn send(&mut self, input: &str, now: Instant) -> Result<SendOutcome> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(SendOutcome::Ignored);
        }
        if self.exchange.is_awaiting() {
            return Err(EcoPalError::ReplyPending);
        }

        let history = self.conversation.history();
        self.conversation.push_user(text, Utc::now());
        self.persist_conversation()?;
        self.tracker.track_question(text)?;

        let resolution = self.resolver.resolve_detailed(text, &history);
        tracing::debug!(source = ?resolution.source, "resolved reply");
        let reply = self.personalize(&resolution);
        self.exchange.begin(reply, now, self.config.reply_delay())?;
        Ok(SendOutcome::Scheduled(resolution))
    }

    /// Applies everything that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Result<Vec<TickEvent>> {
        let mut events = Vec::new();
        while let Some(event) = self.exchange.poll(now) {
            match event {
                ExchangeEvent::ShowTyping => {
                    self.conversation.show_typing(Utc::now());
                    events.push(TickEvent::TypingShown);
                }
                ExchangeEvent::Deliver(reply) => {
                    let message = self.conversation.push_companion(&reply, Utc::now()).clone();
                    events.push(TickEvent::ReplyDelivered(message));
                }
            }
            self.persist_conversation()?;
        }
        Ok(events)
    }

    /// Drops a pending reply and its typing indicator.
    pub fn cancel_pending(&mut self) -> Result<bool> {
        let cancelled = self.exchange.cancel();
        if self.conversation.clear_typing() {
            self.persist_conversation()?;
        }
        Ok(cancelled)
    }

    /// Forgets the learner and the conversation, including stored copies.
    pub fn reset(&mut self) -> Result<()> {
        self.exchange.cancel();
        self.tracker.reset()?;
        self.conversation.clear();
        self.store.remove(CONVERSATION_KEY)?;
        tracing::info!("chat session reset");
        Ok(())
    }

    fn personalize(&self, resolution: &Resolution) -> String {
        let is_topic = matches!(resolution.source, ResolutionSource::Topic { .. });
        let due = self.tracker.profile().total_questions % PERSONALIZE_EVERY == 0;
        if is_topic && due {
            let context = self.tracker.personalized_context();
            if !context.is_empty() {
                return format!("{context}\n\n{}", resolution.reply);
            }
        }
        resolution.reply.clone()
    }

    fn persist_conversation(&self) -> Result<()> {
        persistence::save_conversation(&self.store, self.conversation.messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Sender;
    use crate::persistence::{MemoryStore, PROFILE_KEY};
    use std::time::Duration;

    fn instant_config() -> EcoPalConfig {
        EcoPalConfig {
            typing_delay_ms: 0,
            reply_delay_min_ms: 0,
            reply_delay_max_ms: 0,
            ..EcoPalConfig::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn open(store: &MemoryStore) -> EcoPalEngine<MemoryStore> {
        EcoPalEngine::open_on(store.clone(), instant_config(), today(), Utc::now()).unwrap()
    }

    fn ask(engine: &mut EcoPalEngine<MemoryStore>, question: &str) -> Message {
        let now = Instant::now();
        engine.send(question, now).unwrap();
        let events = engine.tick(now).unwrap();
        match events.last() {
            Some(TickEvent::ReplyDelivered(message)) => message.clone(),
            other => panic!("no reply delivered: {other:?}"),
        }
    }

    #[test]
    fn test_open_seeds_greeting_and_persists() {
        let store = MemoryStore::new();
        let engine = open(&store);
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.messages()[0].sender, Sender::Companion);
        assert_eq!(engine.profile().total_sessions, 1);
        assert!(store.contains(CONVERSATION_KEY));
        assert!(store.contains(PROFILE_KEY));
    }

    #[test]
    fn test_question_gets_knowledge_reply() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        let reply = ask(&mut engine, "What is solar energy?");
        assert!(reply.content.starts_with("Solar energy is amazing!"));
        assert_eq!(engine.messages().len(), 3);
        assert_eq!(engine.profile().interest("renewable-energy"), 1);
        assert!(!engine.is_awaiting_reply());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        assert_eq!(engine.send("   ", Instant::now()).unwrap(), SendOutcome::Ignored);
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.profile().total_questions, 0);
    }

    #[test]
    fn test_send_rejected_while_reply_pending() {
        let store = MemoryStore::new();
        let config = EcoPalConfig {
            typing_delay_ms: 300,
            reply_delay_min_ms: 800,
            reply_delay_max_ms: 800,
            ..EcoPalConfig::default()
        };
        let mut engine = EcoPalEngine::open_on(store, config, today(), Utc::now()).unwrap();
        let start = Instant::now();
        engine.send("wind energy", start).unwrap();
        assert!(matches!(engine.send("solar", start), Err(EcoPalError::ReplyPending)));

        assert_eq!(engine.tick(start).unwrap(), vec![]);
        assert_eq!(engine.tick(start + Duration::from_millis(300)).unwrap(), vec![TickEvent::TypingShown]);
        assert!(engine.messages().last().unwrap().is_typing());

        let events = engine.tick(start + Duration::from_millis(1100)).unwrap();
        assert!(matches!(events.as_slice(), [TickEvent::ReplyDelivered(_)]));
        assert!(!engine.messages().iter().any(Message::is_typing));
        assert!(engine.send("solar", start + Duration::from_millis(1200)).is_ok());
    }

    #[test]
    fn test_repeat_questions_escalate_depth() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        let first = ask(&mut engine, "climate change");
        let second = ask(&mut engine, "climate change");
        assert_ne!(first.content, second.content);
        assert!(second.content.contains("1.2°C"));
    }

    #[test]
    fn test_cancel_removes_typing_placeholder() {
        let store = MemoryStore::new();
        let config = EcoPalConfig {
            typing_delay_ms: 0,
            reply_delay_min_ms: 5000,
            reply_delay_max_ms: 5000,
            ..EcoPalConfig::default()
        };
        let mut engine = EcoPalEngine::open_on(store.clone(), config, today(), Utc::now()).unwrap();
        let start = Instant::now();
        engine.send("wind energy", start).unwrap();
        engine.tick(start).unwrap();
        assert!(engine.messages().last().unwrap().is_typing());

        assert!(engine.cancel_pending().unwrap());
        assert!(!engine.is_awaiting_reply());
        assert!(!engine.messages().iter().any(Message::is_typing));
        let stored = persistence::load_conversation(&store).unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_conversation_survives_reopen() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        ask(&mut engine, "green hydrogen");
        let before: Vec<Message> = engine.messages().to_vec();
        drop(engine);

        let reopened = open(&store);
        assert_eq!(reopened.messages(), before.as_slice());
        assert_eq!(reopened.profile().total_sessions, 2);
        assert_eq!(reopened.profile().learning_streak, 1);
    }

    #[test]
    fn test_stale_typing_placeholder_dropped_on_open() {
        let store = MemoryStore::new();
        let mut messages = vec![Message::new("hi", Sender::User, Utc::now())];
        messages.push(Message::typing_placeholder(Utc::now()));
        persistence::save_conversation(&store, &messages).unwrap();

        let engine = open(&store);
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.messages()[0].content, "hi");
    }

    #[test]
    fn test_every_fifth_topic_reply_is_personalized() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        for _ in 0..4 {
            ask(&mut engine, "solar power for my electric car");
        }
        let fifth = ask(&mut engine, "electric vehicles");
        assert!(fifth.content.starts_with("Since you're interested in both energy and transport"));
        let sixth = ask(&mut engine, "electric vehicles");
        assert!(!sixth.content.starts_with("Since you're"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = MemoryStore::new();
        let mut engine = open(&store);
        ask(&mut engine, "What is solar energy?");
        engine.reset().unwrap();

        assert!(engine.messages().is_empty());
        assert_eq!(engine.profile(), &LearnerProfile::default());
        assert!(!store.contains(PROFILE_KEY));
        assert!(!store.contains(CONVERSATION_KEY));
    }

    #[test]
    fn test_saturated_profile_opens_cleanly() {
        let store = MemoryStore::new();
        store
            .set(
                PROFILE_KEY,
                r#"{"learningStreak":4294967295,"lastActiveDate":"2026-10-18","totalSessions":3}"#,
            )
            .unwrap();
        let engine = open(&store);
        assert_eq!(engine.profile().learning_streak, u32::MAX);
        assert_eq!(engine.profile().total_sessions, 4);
    }

    #[test]
    fn test_corrupt_storage_opens_cleanly() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, "}{").unwrap();
        store.set(CONVERSATION_KEY, "{\"not\":\"an array\"}").unwrap();
        let engine = open(&store);
        assert_eq!(engine.profile().total_sessions, 1);
        assert_eq!(engine.messages().len(), 1);
    }
}
