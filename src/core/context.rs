// File: src/core/context.rs
use crate::core::types::{Message, Sender};
use chrono::{DateTime, Utc};

/// The ordered message list of one chat session.
///
/// Messages are only appended. The single exception is the typing
/// placeholder, which is swapped out when the real reply lands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh conversation opened by the companion's greeting.
    pub fn with_opening(greeting: &str, now: DateTime<Utc>) -> Self {
        let mut conversation = Self::new();
        conversation.push_companion(greeting, now);
        conversation
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages that count as conversation history, without the placeholder.
    pub fn history(&self) -> Vec<Message> {
        self.messages.iter().filter(|m| !m.is_typing()).cloned().collect()
    }

    pub fn push_user(&mut self, content: &str, now: DateTime<Utc>) -> &Message {
        self.push(Message::new(content, Sender::User, now))
    }

    pub fn push_companion(&mut self, content: &str, now: DateTime<Utc>) -> &Message {
        self.clear_typing();
        self.push(Message::new(content, Sender::Companion, now))
    }

    /// Shows the typing placeholder. Only one is ever present.
    pub fn show_typing(&mut self, now: DateTime<Utc>) {
        if !self.is_typing() {
            self.messages.push(Message::typing_placeholder(now));
        }
    }

    /// Removes the typing placeholder, returning whether one was present.
    pub fn clear_typing(&mut self) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| !m.is_typing());
        before != self.messages.len()
    }

    pub fn is_typing(&self) -> bool {
        self.messages.iter().any(Message::is_typing)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}
