//! Pure predicates over the game state
//!
//! Dialogue gates and scripted-event triggers are both expressed as a
//! `Condition` tree and interpreted here, so content tables hold data rather
//! than closures.

use serde::{Deserialize, Serialize};

use crate::core::types::{ContactId, Day, Money};
use crate::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    Always,
    /// Strictly later than the given day
    DayAfter(Day),
    SuspicionAbove(f64),
    PressureAbove(f64),
    TotalWashedAbove(Money),
    CleanAtLeast(Money),
    DirtyAtLeast(Money),
    CpfsAtLeast(u32),
    LevelAtLeast(usize),
    /// At least one outstanding cartel batch
    HasDebt,
    ContactUnlocked(ContactId),
    OptionUnlocked(String),
    EventTriggered(String),
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn holds(&self, state: &GameState) -> bool {
        match self {
            Condition::Always => true,
            Condition::DayAfter(day) => state.day > *day,
            Condition::SuspicionAbove(v) => state.suspicion > *v,
            Condition::PressureAbove(v) => state.pressure > *v,
            Condition::TotalWashedAbove(v) => state.total_washed > *v,
            Condition::CleanAtLeast(v) => state.clean >= *v,
            Condition::DirtyAtLeast(v) => state.dirty >= *v,
            Condition::CpfsAtLeast(n) => state.cpfs >= *n,
            Condition::LevelAtLeast(idx) => state.level_idx >= *idx,
            Condition::HasDebt => !state.batches.is_empty(),
            Condition::ContactUnlocked(c) => state.is_unlocked(*c),
            Condition::OptionUnlocked(id) => state.is_option_unlocked(id),
            Condition::EventTriggered(id) => state.has_triggered(id),
            Condition::All(all) => all.iter().all(|c| c.holds(state)),
            Condition::Any(any) => any.iter().any(|c| c.holds(state)),
            Condition::Not(inner) => !inner.holds(state),
        }
    }

    pub fn not(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    pub fn unlocked(option_id: &str) -> Self {
        Condition::OptionUnlocked(option_id.to_string())
    }
}
