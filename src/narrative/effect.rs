//! State deltas produced by dialogue choices
//!
//! An `Effect` is checked against balances before anything is applied, so a
//! composite effect either lands completely or not at all.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::{ContactId, Money};
use crate::state::GameState;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Effect {
    #[default]
    Nothing,
    SpendClean(Money),
    SpendDirty(Money),
    /// Laundered income; also counts toward total washed
    GainClean(Money),
    AdjustSuspicion(f64),
    AdjustPressure(f64),
    UnlockContact(ContactId),
    /// Add days to the oldest outstanding batch
    ExtendOldestBatch(i32),
    Multi(Vec<Effect>),
}

impl Effect {
    /// Total (dirty, clean) spent by this effect
    fn costs(&self) -> (Money, Money) {
        match self {
            Effect::SpendDirty(v) => (*v, 0.0),
            Effect::SpendClean(v) => (0.0, *v),
            Effect::Multi(effects) => effects.iter().fold((0.0, 0.0), |acc, e| {
                let (d, c) = e.costs();
                (acc.0 + d, acc.1 + c)
            }),
            _ => (0.0, 0.0),
        }
    }

    /// Verify the effect can be applied without driving a balance negative
    pub fn check(&self, state: &GameState) -> Result<()> {
        let (dirty, clean) = self.costs();
        if dirty > state.dirty {
            return Err(GameError::InsufficientDirty {
                needed: dirty,
                available: state.dirty,
            });
        }
        if clean > state.clean {
            return Err(GameError::InsufficientClean {
                needed: clean,
                available: state.clean,
            });
        }
        Ok(())
    }

    /// Apply to the state. Callers must `check` first.
    pub(crate) fn apply(&self, state: &mut GameState) {
        match self {
            Effect::Nothing => {}
            Effect::SpendClean(v) => state.clean = (state.clean - v).max(0.0),
            Effect::SpendDirty(v) => state.dirty = (state.dirty - v).max(0.0),
            Effect::GainClean(v) => {
                state.clean += v;
                state.total_washed += v;
            }
            Effect::AdjustSuspicion(d) => state.adjust_suspicion(*d),
            Effect::AdjustPressure(d) => state.adjust_pressure(*d),
            Effect::UnlockContact(c) => {
                state.unlock_contact(*c);
            }
            Effect::ExtendOldestBatch(days) => {
                if let Some(batch) = state.batches.first_mut() {
                    batch.days += days;
                }
            }
            Effect::Multi(effects) => {
                for effect in effects {
                    effect.apply(state);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;

    #[test]
    fn test_multi_checks_combined_cost() {
        let mut state = GameState::initial(&EngineConfig::default());
        state.clean = 150.0;

        let effect = Effect::Multi(vec![Effect::SpendClean(100.0), Effect::SpendClean(100.0)]);
        assert!(matches!(
            effect.check(&state),
            Err(GameError::InsufficientClean { needed, .. }) if needed == 200.0
        ));

        state.clean = 200.0;
        assert!(effect.check(&state).is_ok());
        effect.apply(&mut state);
        assert_eq!(state.clean, 0.0);
    }

    #[test]
    fn test_gauge_effects_clamp() {
        let mut state = GameState::initial(&EngineConfig::default());
        state.suspicion = 10.0;
        Effect::AdjustSuspicion(-25.0).apply(&mut state);
        assert_eq!(state.suspicion, 0.0);
    }

    #[test]
    fn test_gain_clean_counts_as_washed() {
        let mut state = GameState::initial(&EngineConfig::default());
        Effect::GainClean(1000.0).apply(&mut state);
        assert_eq!(state.clean, 1000.0);
        assert_eq!(state.total_washed, 1000.0);
    }
}
