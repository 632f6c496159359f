//! Integration tests for the tick loop
//!
//! These tests verify time progression through the public API:
//! - Cartel batch lifecycle (repayment and default)
//! - Clock gating by modals and the tutorial
//! - Level progression and terminal endings
//! - Seeded determinism

use mestre::content::Content;
use mestre::{EngineConfig, GameOverReason, GameStore, ModalKind, TickEvent};

fn config() -> EngineConfig {
    EngineConfig {
        tutorial_enabled: false,
        ..EngineConfig::default()
    }
}

fn store(config: EngineConfig) -> GameStore {
    GameStore::new(config, Content::standard(), 77).unwrap()
}

/// Tick to day 2 and take the first bag (350k due in 90 days)
fn accept_first_bag(store: &mut GameStore) {
    store.tick();
    assert!(store.state().has_pending_bag);
    store.respond_to_bag(true).unwrap();
    assert_eq!(store.state().batches.len(), 1);
    assert_eq!(store.state().batches[0].days, 90);
}

#[test]
fn test_batch_repaid_after_45_days_is_removed() {
    let mut store = store(EngineConfig {
        starting_clean: 400_000.0,
        ..config()
    });
    accept_first_bag(&mut store);

    for _ in 0..45 {
        store.tick();
    }
    assert_eq!(store.state().batches[0].days, 45);

    store.confirm_pay().unwrap();
    assert!(store.state().batches.is_empty());
    assert!((store.state().clean - 50_000.0).abs() < 1e-6);
}

#[test]
fn test_unpaid_batch_defaults_exactly_once() {
    let mut store = store(config());
    accept_first_bag(&mut store);

    let mut defaults = 0;
    let mut spike = None;
    for _ in 0..120 {
        let before = store.state().pressure;
        let events = store.tick();
        if events
            .iter()
            .any(|e| matches!(e, TickEvent::BatchDefaulted { .. }))
        {
            defaults += 1;
            spike = Some(store.state().pressure - before);
        }
    }

    assert_eq!(defaults, 1);
    assert!(store.state().batches.is_empty());
    // +25 spike, then relief because no batch is left
    let spike = spike.unwrap();
    assert!((spike - 24.9).abs() < 1e-9, "spike {}", spike);
    assert!(!store.state().is_game_over);
}

#[test]
fn test_default_can_end_the_game() {
    let mut store = store(EngineConfig {
        default_pressure_spike: 100.0,
        pressure_relief_rate: 0.0,
        ..config()
    });
    accept_first_bag(&mut store);

    let mut ending = None;
    for _ in 0..100 {
        for event in store.tick() {
            if let TickEvent::GameOver { reason } = event {
                ending = Some(reason);
            }
        }
    }

    assert_eq!(ending, Some(GameOverReason::Cartel));
    assert!(store.state().is_game_over);
    assert!(store.state().is_paused);
    assert!(store.state().game_over_detail.is_some());
    assert!(matches!(store.buy_cpf(1), Err(mestre::GameError::GameOver)));
}

#[test]
fn test_open_modal_freezes_clock() {
    let mut store = store(config());
    store.set_modal(ModalKind::Pay).unwrap();

    for _ in 0..10 {
        assert!(store.tick().is_empty());
    }
    assert_eq!(store.state().day, 1);

    store.set_modal(ModalKind::None).unwrap();
    store.tick();
    assert_eq!(store.state().day, 2);
}

#[test]
fn test_tutorial_freezes_clock_until_finished() {
    let mut store = GameStore::standard(5);
    store.tick();
    assert_eq!(store.state().day, 1);

    while store.tutorial_step().is_some() {
        store.advance_tutorial();
    }
    store.tick();
    assert_eq!(store.state().day, 2);
}

#[test]
fn test_level_up_unlocks_hacker_offer_same_tick() {
    let mut store = store(EngineConfig {
        starting_clean: 600_000.0,
        ..config()
    });

    let events = store.tick();
    assert!(events.contains(&TickEvent::LevelUp {
        level_idx: 1,
        name: "Gerente".to_string()
    }));
    assert_eq!(store.level().max_batch, 50);
    assert!(store.state().is_option_unlocked("hacker_wipe_logs"));
    assert!(store.state().has_triggered("hacker_wipe_offer"));
    assert!(!store.state().has_triggered("hacker_bulk_offer"));
}

#[test]
fn test_bag_size_follows_level() {
    let mut store = store(EngineConfig {
        starting_clean: 600_000.0,
        first_bag_day: 3,
        ..config()
    });
    store.tick();
    assert_eq!(store.state().level_idx, 1);

    let events = store.tick();
    assert!(events.contains(&TickEvent::BagOffered {
        amount: 1_500_000.0
    }));
}

#[test]
fn test_same_seed_same_schedule() {
    let run = |seed: u64| {
        let mut store = GameStore::new(config(), Content::standard(), seed).unwrap();
        let mut days = Vec::new();
        for _ in 0..300 {
            if store.state().has_pending_bag {
                store.respond_to_bag(true).unwrap();
                store.confirm_pay().ok();
            }
            store.tick();
            days.push(store.state().next_bag_day);
        }
        days
    };

    assert_eq!(run(1234), run(1234));
}

#[test]
fn test_restart_after_game_over() {
    let mut store = store(EngineConfig {
        default_pressure_spike: 100.0,
        pressure_relief_rate: 0.0,
        ..config()
    });
    accept_first_bag(&mut store);
    while !store.state().is_game_over {
        store.tick();
    }

    store.restart_game();
    let state = store.state();
    assert!(!state.is_game_over);
    assert_eq!(state.day, 1);
    assert!(state.batches.is_empty());
    assert_eq!(state.pressure, 0.0);
    assert_eq!(store.pending_followups(), 0);
}
