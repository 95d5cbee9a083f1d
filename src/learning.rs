// File: src/learning.rs
use crate::core::types::{ExperienceLevel, LearnerProfile, TopicKey};
use crate::error::Result;
use crate::persistence::{self, KeyValueStore, PROFILE_KEY};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Coarse interest categories and the substrings that put a question in them.
/// A question can land in several categories.
pub const TOPIC_CATEGORIES: &[(TopicKey, &[&str])] = &[
    ("renewable-energy", &["solar", "wind", "hydro", "geothermal", "nuclear", "hydrogen", "renewable", "energy", "power", "electricity"]),
    ("climate-science", &["climate", "greenhouse", "carbon", "warming", "temperature", "emissions", "co2", "methane", "atmosphere"]),
    ("sustainable-living", &["sustainable", "zero waste", "recycle", "reduce", "reuse", "footprint", "lifestyle", "consumption"]),
    ("nature-biodiversity", &["biodiversity", "species", "ecosystem", "forest", "ocean", "wildlife", "nature", "animal", "plant", "coral"]),
    ("water-conservation", &["water", "ocean", "sea", "river", "lake", "rain", "drought", "freshwater", "wetland"]),
    ("transportation", &["electric", "ev", "car", "transport", "aviation", "flight", "bike", "cycling", "public transit"]),
    ("food-agriculture", &["food", "farm", "agriculture", "meat", "vegan", "plant-based", "organic", "regenerative"]),
    ("policy-economics", &["policy", "paris agreement", "carbon tax", "net zero", "legislation", "economy", "green deal"]),
];

const FIRST_SESSION_GREETING: &str = "Hello! 🌱 I'm EcoPal, your environmental companion! I'll remember what topics interest you and personalize our conversations. Ask me anything about climate, energy, or sustainability! 🌍";

/// Never-explored categories offered before reinforcing known ones.
const RECOMMEND_UNEXPLORED: usize = 2;
const RECOMMEND_EXPLORED: usize = 2;

/// Human-readable label for a category key.
pub fn display_name(topic: &str) -> &str {
    match topic {
        "renewable-energy" => "renewable energy",
        "climate-science" => "climate science",
        "sustainable-living" => "sustainable living",
        "nature-biodiversity" => "nature & biodiversity",
        "water-conservation" => "water conservation",
        "transportation" => "green transportation",
        "food-agriculture" => "sustainable food",
        "policy-economics" => "climate policy",
        other => other,
    }
}

/// Categories a question touches, in table order.
pub fn classify(question: &str) -> Vec<TopicKey> {
    let lower = question.to_lowercase();
    TOPIC_CATEGORIES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .collect()
}

/// Keeps the learner profile up to date and writes it back after every change.
pub struct ProfileTracker<S: KeyValueStore> {
    profile: LearnerProfile,
    store: S,
}

impl<S: KeyValueStore> ProfileTracker<S> {
    /// Hydrates from the store. Missing or corrupt data yields a fresh profile.
    pub fn load(store: S) -> Self {
        let profile = persistence::load_profile(&store);
        Self { profile, store }
    }

    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    /// Records a question and returns the categories it was counted under.
    pub fn track_question(&mut self, question: &str) -> Result<Vec<TopicKey>> {
        let categories = classify(question);
        for category in &categories {
            let count = self.profile.interests.entry(category.to_string()).or_insert(0);
            *count = count.saturating_add(1);
            if !self.profile.has_explored(category) {
                self.profile.topics_explored.push(category.to_string());
            }
        }
        self.profile.total_questions = self.profile.total_questions.saturating_add(1);
        self.profile.recompute();
        tracing::debug!(?categories, total = self.profile.total_questions, "tracked question");
        self.persist()?;
        Ok(categories)
    }

    /// Marks the start of an app session using the local calendar day.
    pub fn on_session_start(&mut self) -> Result<()> {
        self.on_session_start_on(Local::now().date_naive(), Utc::now())
    }

    pub fn on_session_start_on(&mut self, today: NaiveDate, now: DateTime<Utc>) -> Result<()> {
        let profile = &mut self.profile;
        profile.learning_streak = match profile.last_active_date {
            Some(last) if last == today => profile.learning_streak,
            Some(last) if last.succ_opt() == Some(today) => profile.learning_streak.saturating_add(1),
            _ => 1,
        };
        profile.total_sessions = profile.total_sessions.saturating_add(1);
        profile.last_visit = Some(now);
        profile.last_active_date = Some(today);
        tracing::info!(
            sessions = profile.total_sessions,
            streak = profile.learning_streak,
            "session started"
        );
        self.persist()
    }

    pub fn greeting(&self) -> String {
        let p = &self.profile;
        if p.total_sessions <= 1 {
            return FIRST_SESSION_GREETING.to_string();
        }

        let mut parts = Vec::new();
        match p.learning_streak {
            7.. => parts.push(format!(
                "Amazing! 🔥 You're on a {}-day learning streak!",
                p.learning_streak
            )),
            2.. => parts.push(format!(
                "Great to see you back! 🌟 {} days in a row!",
                p.learning_streak
            )),
            _ => parts.push("Welcome back! 🌱".to_string()),
        }

        if let Some(top) = p.favorite_topics.first() {
            parts.push(format!(
                "I remember you're really interested in {}! 💚",
                display_name(top)
            ));
        }

        match p.experience_level {
            ExperienceLevel::Expert => {
                parts.push("As an expert learner, I'll provide you with deeper insights. 🎓".to_string())
            }
            ExperienceLevel::Advanced => {
                parts.push("You've explored so much! Ready to dive deeper? 🌊".to_string())
            }
            _ if p.total_questions >= 5 => parts.push(format!(
                "You've asked {} questions so far, keep exploring! 🚀",
                p.total_questions
            )),
            _ => {}
        }

        parts.push("What would you like to learn today? 🌍".to_string());
        parts.join(" ")
    }

    /// Up to two unexplored categories, then up to two explored ones with the
    /// lowest interest counts.
    pub fn recommended_topics(&self) -> Vec<TopicKey> {
        let p = &self.profile;
        let (explored, unexplored): (Vec<TopicKey>, Vec<TopicKey>) = TOPIC_CATEGORIES
            .iter()
            .map(|(category, _)| *category)
            .partition(|category| p.has_explored(category));

        let mut least_reinforced = explored;
        least_reinforced.sort_by_key(|category| p.interest(category));

        unexplored
            .into_iter()
            .take(RECOMMEND_UNEXPLORED)
            .chain(least_reinforced.into_iter().take(RECOMMEND_EXPLORED))
            .collect()
    }

    /// Extra framing for replies based on what the learner cares about.
    /// Empty until the learner has favorite topics.
    pub fn personalized_context(&self) -> String {
        let p = &self.profile;
        if p.favorite_topics.is_empty() {
            return String::new();
        }
        let favors = |topic: &str| p.favorite_topics.iter().any(|t| t == topic);

        let mut parts = Vec::new();
        if favors("renewable-energy") && favors("transportation") {
            parts.push("Since you're interested in both energy and transport, you might find the EV-grid connection fascinating!");
        }
        if favors("climate-science") && favors("nature-biodiversity") {
            parts.push("Your interest in climate and biodiversity connects to nature-based solutions!");
        }
        if p.experience_level >= ExperienceLevel::Advanced {
            parts.push("I'll include more technical details for you.");
        }
        parts.join(" ")
    }

    /// Forgets everything and removes the stored profile.
    pub fn reset(&mut self) -> Result<()> {
        self.profile = LearnerProfile::default();
        self.store.remove(PROFILE_KEY)?;
        tracing::info!("learner profile reset");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        persistence::save_profile(&self.store, &self.profile)
    }
}
