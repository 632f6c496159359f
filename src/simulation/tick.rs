//! Tick system - advances the game by one day
//!
//! Order matters:
//! delivery offer -> batch maturation -> pressure drift -> terminal checks
//! -> level progression -> scripted events
//!
//! A terminal condition ends the tick immediately, so scripted events never
//! fire on a finished game.

use rand::Rng;

use crate::content::ending;
use crate::core::config::EngineConfig;
use crate::core::types::{BatchId, GameOverReason, Money};
use crate::narrative::scripted::evaluate_scripted_events;
use crate::state::{Batch, GameState, GAUGE_MAX};
use crate::store::GameStore;

/// Events generated during a tick, for the presentation layer's log
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The dealer offered a new bag
    BagOffered { amount: Money },
    /// A batch ran out of days before it was repaid
    BatchDefaulted { batch: BatchId, unpaid: Money },
    /// The player reached a new level
    LevelUp { level_idx: usize, name: String },
    /// A scripted story event fired
    ScriptedEvent { id: String },
    /// The run ended
    GameOver { reason: GameOverReason },
}

/// Run a single simulation tick
///
/// 1. Advance the day
/// 2. Offer a delivery if one is due and none is pending
/// 3. Age batches; expired ones default with a pressure spike
/// 4. Drift pressure from the remaining batches
/// 5. End the game if a gauge is full
/// 6. Advance at most one level
/// 7. Evaluate scripted events
///
/// No-op while paused or after game over.
pub fn run_simulation_tick(store: &mut GameStore) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if store.state.is_paused || store.state.is_game_over {
        return events;
    }

    store.state.day += 1;

    spawn_delivery(store, &mut events);

    for batch in mature_batches(&mut store.state, &store.config) {
        tracing::warn!(
            batch = ?batch.id,
            unpaid = batch.due,
            pressure = store.state.pressure,
            "Batch defaulted"
        );
        events.push(TickEvent::BatchDefaulted {
            batch: batch.id,
            unpaid: batch.due,
        });
    }

    drift_pressure(&mut store.state, &store.config);

    if let Some(reason) = check_terminal(&store.state) {
        end_game(&mut store.state, reason);
        tracing::info!(
            session = %store.session_id(),
            day = store.state.day,
            ?reason,
            "Game over"
        );
        events.push(TickEvent::GameOver { reason });
        return events;
    }

    if let Some(level_idx) = advance_level(store) {
        let name = store.level().name.clone();
        tracing::info!(day = store.state.day, level = %name, "Level up");
        events.push(TickEvent::LevelUp { level_idx, name });
    }

    for id in evaluate_scripted_events(store) {
        events.push(TickEvent::ScriptedEvent { id });
    }

    events
}

impl GameStore {
    /// Advance the simulation one day
    pub fn tick(&mut self) -> Vec<TickEvent> {
        run_simulation_tick(self)
    }
}

fn spawn_delivery(store: &mut GameStore, events: &mut Vec<TickEvent>) {
    if store.state.day < store.state.next_bag_day || store.state.has_pending_bag {
        return;
    }

    let level = store.level();
    let (amount, interval) = (level.bag_size, level.bag_interval);
    let jitter = store.rng.gen_range(0..store.config.bag_jitter_days);

    store.offer_bag(amount);
    store.state.next_bag_day = store.state.day + interval + jitter;
    events.push(TickEvent::BagOffered { amount });
}

/// Count every batch down one day and pull out the ones that defaulted.
/// Each default adds the configured pressure spike.
fn mature_batches(state: &mut GameState, config: &EngineConfig) -> Vec<Batch> {
    for batch in &mut state.batches {
        batch.days -= 1;
    }

    let (defaulted, live): (Vec<Batch>, Vec<Batch>) =
        state.batches.drain(..).partition(|b| b.days <= 0);
    state.batches = live;

    for _ in &defaulted {
        state.adjust_pressure(config.default_pressure_spike);
    }
    defaulted
}

fn drift_pressure(state: &mut GameState, config: &EngineConfig) {
    let critical = state
        .batches
        .iter()
        .any(|b| b.days < config.critical_batch_days);

    if critical {
        state.adjust_pressure(config.critical_pressure_rate);
    } else if state.batches.len() > config.crowded_batch_count {
        state.adjust_pressure(config.crowded_pressure_rate);
    } else if state.pressure > 0.0 {
        state.adjust_pressure(-config.pressure_relief_rate);
    }
}

fn check_terminal(state: &GameState) -> Option<GameOverReason> {
    if state.suspicion >= GAUGE_MAX {
        Some(GameOverReason::Police)
    } else if state.pressure >= GAUGE_MAX {
        Some(GameOverReason::Cartel)
    } else {
        None
    }
}

fn end_game(state: &mut GameState, reason: GameOverReason) {
    let (_, detail) = ending(reason);
    state.is_game_over = true;
    state.game_over_reason = Some(reason);
    state.game_over_detail = Some(detail.to_string());
    state.has_pending_bag = false;
    state.sell = None;
    state.refresh_pause();
}

/// Move up one level if the current goal is met. Returns the new index.
fn advance_level(store: &mut GameStore) -> Option<usize> {
    if store.is_final_level() {
        return None;
    }
    let goal = store.level().goal?;
    if store.state.clean < goal {
        return None;
    }

    store.state.level_idx += 1;
    if store.is_final_level() && store.state.final_level_day.is_none() {
        store.state.final_level_day = Some(store.state.day);
    }
    Some(store.state.level_idx)
}
