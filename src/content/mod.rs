//! Static content tables
//!
//! Everything here is read-only data, loaded once when a store is built:
//! - Levels (optionally from TOML)
//! - Contact profiles and their dialogue options
//! - Scripted story events
//! - Banks, identity packs, tutorial steps, ending texts

pub mod contacts;
pub mod dialogue;
pub mod events;
pub mod levels;
pub mod market;
pub mod tutorial;

pub use contacts::{profile, ContactProfile};
pub use dialogue::DialogueTable;
pub use levels::{load_levels, parse_levels, standard_levels, validate_levels, Level};
pub use market::IdentityOffer;
pub use tutorial::TutorialStep;

use crate::core::error::{GameError, Result};
use crate::core::types::GameOverReason;
use crate::narrative::scripted::ScriptedEvent;

/// All content consumed by the engine
#[derive(Debug, Clone)]
pub struct Content {
    pub levels: Vec<Level>,
    pub dialogue: DialogueTable,
    pub events: Vec<ScriptedEvent>,
    pub banks: Vec<String>,
    pub identity_offers: Vec<IdentityOffer>,
    pub tutorial: Vec<TutorialStep>,
}

impl Content {
    /// The shipped game content
    pub fn standard() -> Self {
        Self {
            levels: standard_levels(),
            dialogue: DialogueTable::standard(),
            events: events::standard_events(),
            banks: market::standard_banks(),
            identity_offers: market::standard_identity_offers(),
            tutorial: tutorial::standard_tutorial(),
        }
    }

    /// Replace the level table
    pub fn with_levels(mut self, levels: Vec<Level>) -> Result<Self> {
        validate_levels(&levels)?;
        self.levels = levels;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_levels(&self.levels)?;
        if self.banks.is_empty() {
            return Err(GameError::Config("no banks to sell debt packs to".into()));
        }
        Ok(())
    }

    /// Level for an index, saturating at the final level
    pub fn level(&self, idx: usize) -> &Level {
        let last = self.levels.len().saturating_sub(1);
        &self.levels[idx.min(last)]
    }

    pub fn final_level_idx(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Identity packs the hacker offers at this level
    pub fn identity_offers_for(&self, level_idx: usize) -> impl Iterator<Item = &IdentityOffer> {
        self.identity_offers
            .iter()
            .filter(move |o| o.min_level <= level_idx)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::standard()
    }
}

/// Title and detail shown on the game-over screen
pub fn ending(reason: GameOverReason) -> (&'static str, &'static str) {
    match reason {
        GameOverReason::Police => ("ARRESTED", "The Federal Police caught you."),
        GameOverReason::Cartel => (
            "MAXIMUM COLLECTION",
            "The cartel doesn't forgive. End of the line.",
        ),
    }
}
