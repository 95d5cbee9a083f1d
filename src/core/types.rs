// src/core/types.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A category key from the tracker's topic table, e.g. "renewable-energy".
pub type TopicKey = &'static str;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    /// Older conversations stored the companion as "ecopal".
    #[serde(alias = "ecopal")]
    Companion,
}

/// A single chat message. The whole ordered list of these is persisted
/// verbatim on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Set only on the transient "typing" placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_typing: Option<bool>,
}

impl Message {
    pub fn new(content: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp,
            is_typing: None,
        }
    }

    pub fn typing_placeholder(timestamp: DateTime<Utc>) -> Self {
        Self {
            is_typing: Some(true),
            ..Self::new("", Sender::Companion, timestamp)
        }
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing.unwrap_or(false)
    }
}

/// Inferred learner experience. Always derived from the question count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub fn from_questions(total_questions: u32) -> Self {
        match total_questions {
            50.. => Self::Expert,
            25.. => Self::Advanced,
            10.. => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

/// What the companion remembers about a learner between sessions.
///
/// `experience_level` and `favorite_topics` are derived; call
/// [`LearnerProfile::recompute`] after touching the counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    /// Category key -> number of questions that touched it.
    pub interests: BTreeMap<String, u32>,
    /// Category keys in first-seen order.
    pub topics_explored: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub total_sessions: u32,
    pub total_questions: u32,
    pub last_visit: Option<DateTime<Utc>>,
    /// Top three categories by count, highest first.
    pub favorite_topics: Vec<String>,
    pub learning_streak: u32,
    pub last_active_date: Option<NaiveDate>,
}

/// How many favorite topics a profile keeps.
pub const FAVORITE_TOPIC_COUNT: usize = 3;

impl LearnerProfile {
    pub fn interest(&self, topic: &str) -> u32 {
        self.interests.get(topic).copied().unwrap_or(0)
    }

    pub fn has_explored(&self, topic: &str) -> bool {
        self.topics_explored.iter().any(|t| t == topic)
    }

    /// Rebuilds the derived fields from the counters. Ties between equal
    /// counts keep first-seen order.
    pub fn recompute(&mut self) {
        for topic in self.interests.keys() {
            if !self.topics_explored.iter().any(|t| t == topic) {
                self.topics_explored.push(topic.clone());
            }
        }
        let mut ranked: Vec<(&String, u32)> = self
            .topics_explored
            .iter()
            .filter_map(|topic| self.interests.get(topic).map(|&count| (topic, count)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        self.favorite_topics = ranked
            .into_iter()
            .take(FAVORITE_TOPIC_COUNT)
            .map(|(topic, _)| topic.clone())
            .collect();
        self.experience_level = ExperienceLevel::from_questions(self.total_questions);
    }
}
