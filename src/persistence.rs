// File: src/persistence.rs
//! Local key/value storage for the learner profile and the conversation.
//!
//! Stored state is a cache of the learner's device, never a source of truth:
//! anything that fails to read or parse is replaced by defaults.

use crate::core::types::{LearnerProfile, Message};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

pub const PROFILE_KEY: &str = "ecopal-user-profile";
pub const CONVERSATION_KEY: &str = "ecopal-conversation";

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// One JSON file per key inside a directory. Writes go through a temp file
/// in the same directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(self.path_for(key))
            .map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

fn read_raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored state, using defaults");
            None
        }
    }
}

/// Loads the stored profile, or the default profile if there is none or it
/// cannot be used.
pub fn load_profile(store: &dyn KeyValueStore) -> LearnerProfile {
    read_raw(store, PROFILE_KEY)
        .map(|raw| profile_from_json(&raw))
        .unwrap_or_default()
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &LearnerProfile) -> Result<()> {
    store.set(PROFILE_KEY, &serde_json::to_string(profile)?)
}

/// Validates a stored profile field by field. Fields with the wrong shape
/// keep their default; derived fields are always recomputed.
///
/// A malformed `topicsExplored` is rebuilt from the interest keys, which come
/// back in alphabetical order rather than first-seen order. Favorite-topic
/// ties then break alphabetically.
pub fn profile_from_json(raw: &str) -> LearnerProfile {
    let mut profile = LearnerProfile::default();
    let fields = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            tracing::warn!("stored profile is not a JSON object, using defaults");
            return profile;
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored profile is not valid JSON, using defaults");
            return profile;
        }
    };

    take_field(&fields, "interests", &mut profile.interests);
    take_field(&fields, "topicsExplored", &mut profile.topics_explored);
    take_field(&fields, "totalSessions", &mut profile.total_sessions);
    take_field(&fields, "totalQuestions", &mut profile.total_questions);
    take_field(&fields, "lastVisit", &mut profile.last_visit);
    take_field(&fields, "learningStreak", &mut profile.learning_streak);
    take_field(&fields, "lastActiveDate", &mut profile.last_active_date);

    let mut seen = std::collections::HashSet::new();
    profile.topics_explored.retain(|topic| seen.insert(topic.clone()));
    profile.recompute();
    profile
}

fn take_field<T: DeserializeOwned>(fields: &serde_json::Map<String, Value>, name: &str, slot: &mut T) {
    let Some(value) = fields.get(name) else {
        return;
    };
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => *slot = parsed,
        Err(e) => tracing::warn!(field = name, error = %e, "ignoring malformed profile field"),
    }
}

/// Loads the stored conversation. `None` means there is nothing usable.
pub fn load_conversation(store: &dyn KeyValueStore) -> Option<Vec<Message>> {
    read_raw(store, CONVERSATION_KEY).and_then(|raw| conversation_from_json(&raw))
}

pub fn save_conversation(store: &dyn KeyValueStore, messages: &[Message]) -> Result<()> {
    store.set(CONVERSATION_KEY, &serde_json::to_string(messages)?)
}

/// Parses a stored message array, skipping entries that don't fit the
/// message shape.
pub fn conversation_from_json(raw: &str) -> Option<Vec<Message>> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!("stored conversation is not a JSON array, starting fresh");
            return None;
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored conversation is not valid JSON, starting fresh");
            return None;
        }
    };

    let messages = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Message>(entry) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed stored message");
                None
            }
        })
        .collect();
    Some(messages)
}
