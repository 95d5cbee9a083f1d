// File: src/simulation.rs
//! Gamified simulations: build a solar village on a budget, or track the
//! carbon cost of a day's choices.

use crate::error::{EcoPalError, Result};

/// Progress at which a simulation's challenge can be completed.
pub const COMPLETE_AT_PROGRESS: u32 = 80;
const MAX_PROGRESS: u32 = 100;

const VILLAGE_PROGRESS_STEP: u32 = 15;
const VILLAGE_POINTS_PER_ITEM: i32 = 10;
const TRACKER_PROGRESS_STEP: u32 = 10;
const TRACKER_GOOD_CHOICE_POINTS: i32 = 5;
const TRACKER_BAD_CHOICE_POINTS: i32 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub points: u32,
}

pub const VILLAGE_BUILDER: Achievement = Achievement { name: "Village Builder", points: 50 };
pub const CHALLENGE_COMPLETED: Achievement = Achievement { name: "Challenge Completed!", points: 100 };

/// Shared meters for both simulations. Each simulation only moves the
/// meters it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub energy: i32,
    pub happiness: i32,
    pub budget: u32,
    pub carbon_footprint: u32,
    pub progress: u32,
    pub score: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            energy: 50,
            happiness: 70,
            budget: 1000,
            carbon_footprint: 100,
            progress: 0,
            score: 0,
        }
    }
}

impl GameState {
    pub fn can_complete(&self) -> bool {
        self.progress >= COMPLETE_AT_PROGRESS
    }

    fn advance(&mut self, step: u32) {
        self.progress = self.progress.saturating_add(step).min(MAX_PROGRESS);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VillageItem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub cost: u32,
    pub energy: i32,
    pub happiness: i32,
}

pub const VILLAGE_ITEMS: &[VillageItem] = &[
    VillageItem { id: "solar-panels", name: "Solar Panels", icon: "☀️", cost: 200, energy: 30, happiness: 0 },
    VillageItem { id: "wind-turbine", name: "Wind Turbine", icon: "🌪️", cost: 150, energy: 20, happiness: 0 },
    VillageItem { id: "green-roof", name: "Green Rooftop", icon: "🌱", cost: 100, energy: 0, happiness: 15 },
    VillageItem { id: "rain-collector", name: "Rain Collector", icon: "🌧️", cost: 80, energy: 0, happiness: 10 },
    VillageItem { id: "led-lights", name: "LED Street Lights", icon: "💡", cost: 60, energy: 10, happiness: 0 },
    VillageItem { id: "bike-station", name: "Bike Station", icon: "🚲", cost: 120, energy: 0, happiness: 20 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub item: &'static VillageItem,
    /// Set on the purchase that first carries progress to 50 or beyond.
    pub achievement: Option<Achievement>,
}

/// Spend a fixed budget on green infrastructure. Each item can be bought once.
#[derive(Debug, Clone, Default)]
pub struct SolarVillage {
    state: GameState,
    built: Vec<&'static str>,
}

impl SolarVillage {
    const BUILDER_PROGRESS: u32 = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn items(&self) -> &'static [VillageItem] {
        VILLAGE_ITEMS
    }

    pub fn is_built(&self, id: &str) -> bool {
        self.built.iter().any(|b| *b == id)
    }

    pub fn can_afford(&self, item: &VillageItem) -> bool {
        self.state.budget >= item.cost
    }

    pub fn select(&mut self, id: &str) -> Result<Purchase> {
        let item = VILLAGE_ITEMS
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| EcoPalError::UnknownItem(id.to_string()))?;
        if self.is_built(item.id) {
            return Err(EcoPalError::AlreadyBuilt(item.name.to_string()));
        }
        if !self.can_afford(item) {
            return Err(EcoPalError::OverBudget {
                cost: item.cost,
                budget: self.state.budget,
            });
        }

        let before = self.state.progress;
        let state = &mut self.state;
        state.budget -= item.cost;
        state.energy += item.energy;
        state.happiness += item.happiness;
        state.advance(VILLAGE_PROGRESS_STEP);
        state.score += VILLAGE_POINTS_PER_ITEM;
        self.built.push(item.id);

        let achievement = (before < Self::BUILDER_PROGRESS && state.progress >= Self::BUILDER_PROGRESS)
            .then_some(VILLAGE_BUILDER);
        tracing::debug!(item = item.id, budget = state.budget, progress = state.progress, "village item built");
        Ok(Purchase { item, achievement })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Change to the footprint in kg CO₂. Negative is a good choice.
    pub carbon: i32,
}

impl Activity {
    pub fn is_green(&self) -> bool {
        self.carbon < 0
    }
}

pub const CARBON_ACTIVITIES: &[Activity] = &[
    Activity { id: "walk", name: "Walk to Work", icon: "🚶", carbon: -5 },
    Activity { id: "bike", name: "Bike to Work", icon: "🚲", carbon: -3 },
    Activity { id: "public-transport", name: "Public Transport", icon: "🚌", carbon: -2 },
    Activity { id: "electric-car", name: "Electric Car", icon: "🔋", carbon: -1 },
    Activity { id: "car", name: "Drive Car", icon: "🚗", carbon: 3 },
    Activity { id: "plane", name: "Short Flight", icon: "✈️", carbon: 10 },
];

/// Log daily choices and watch the footprint move. Activities can repeat.
#[derive(Debug, Clone, Default)]
pub struct CarbonTracker {
    state: GameState,
}

impl CarbonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn activities(&self) -> &'static [Activity] {
        CARBON_ACTIVITIES
    }

    /// Score as shown to the player; never below zero.
    pub fn eco_score(&self) -> u32 {
        self.state.score.max(0).unsigned_abs()
    }

    pub fn record(&mut self, id: &str) -> Result<&'static Activity> {
        let activity = CARBON_ACTIVITIES
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| EcoPalError::UnknownItem(id.to_string()))?;

        let state = &mut self.state;
        state.carbon_footprint = state.carbon_footprint.saturating_add_signed(activity.carbon);
        state.advance(TRACKER_PROGRESS_STEP);
        state.score += if activity.is_green() {
            TRACKER_GOOD_CHOICE_POINTS
        } else {
            TRACKER_BAD_CHOICE_POINTS
        };
        tracing::debug!(
            activity = activity.id,
            footprint = state.carbon_footprint,
            score = state.score,
            "activity recorded"
        );
        Ok(activity)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_village_purchase_updates_meters() {
        let mut village = SolarVillage::new();
        let purchase = village.select("solar-panels").unwrap();
        assert_eq!(purchase.item.name, "Solar Panels");
        assert_eq!(purchase.achievement, None);
        assert_eq!(
            *village.state(),
            GameState {
                energy: 80,
                happiness: 70,
                budget: 800,
                carbon_footprint: 100,
                progress: 15,
                score: 10,
            }
        );
        assert!(village.is_built("solar-panels"));
    }

    #[test]
    fn test_village_item_cannot_be_bought_twice() {
        let mut village = SolarVillage::new();
        village.select("green-roof").unwrap();
        assert!(matches!(village.select("green-roof"), Err(EcoPalError::AlreadyBuilt(_))));
        assert_eq!(village.state().budget, 900);
        assert_eq!(village.state().score, 10);
    }

    #[test]
    fn test_village_rejects_purchases_beyond_budget() {
        let mut village = SolarVillage::new();
        village.state.budget = 100;
        assert!(matches!(
            village.select("solar-panels"),
            Err(EcoPalError::OverBudget { cost: 200, budget: 100 })
        ));
        assert!(!village.is_built("solar-panels"));
        assert!(village.select("green-roof").is_ok());
        assert_eq!(village.state().budget, 0);
    }

    #[test]
    fn test_unknown_items_are_rejected() {
        let mut village = SolarVillage::new();
        assert!(matches!(village.select("coal-plant"), Err(EcoPalError::UnknownItem(_))));
        let mut tracker = CarbonTracker::new();
        assert!(matches!(tracker.record("teleport"), Err(EcoPalError::UnknownItem(_))));
        assert_eq!(tracker.state().progress, 0);
    }

    #[test]
    fn test_village_builder_awarded_once_when_crossing_half() {
        let mut village = SolarVillage::new();
        let awards: Vec<Option<Achievement>> = VILLAGE_ITEMS
            .iter()
            .map(|item| village.select(item.id).unwrap().achievement)
            .collect();
        // 15, 30, 45, 60, 75, 90
        assert_eq!(awards, vec![None, None, None, Some(VILLAGE_BUILDER), None, None]);
        assert_eq!(village.state().progress, 90);
        assert_eq!(village.state().score, 60);
        assert_eq!(village.state().budget, 290);
        assert!(village.state().can_complete());
    }

    #[test]
    fn test_tracker_scores_good_and_bad_choices() {
        let mut tracker = CarbonTracker::new();
        assert!(tracker.record("walk").unwrap().is_green());
        assert!(!tracker.record("plane").unwrap().is_green());
        let state = tracker.state();
        assert_eq!(state.carbon_footprint, 105);
        assert_eq!(state.progress, 20);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_tracker_footprint_never_goes_negative() {
        let mut tracker = CarbonTracker::new();
        for _ in 0..25 {
            tracker.record("walk").unwrap();
        }
        assert_eq!(tracker.state().carbon_footprint, 0);
        assert_eq!(tracker.state().progress, 100);
        assert_eq!(tracker.state().score, 125);
    }

    #[test]
    fn test_eco_score_is_clamped_for_display() {
        let mut tracker = CarbonTracker::new();
        tracker.record("car").unwrap();
        tracker.record("plane").unwrap();
        assert_eq!(tracker.state().score, -4);
        assert_eq!(tracker.eco_score(), 0);
    }

    #[test]
    fn test_reset_restores_starting_state() {
        let mut village = SolarVillage::new();
        village.select("bike-station").unwrap();
        village.reset();
        assert_eq!(*village.state(), GameState::default());
        assert!(!village.is_built("bike-station"));

        let mut tracker = CarbonTracker::new();
        tracker.record("bike").unwrap();
        tracker.reset();
        assert_eq!(*tracker.state(), GameState::default());
    }
}
