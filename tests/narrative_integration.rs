//! Integration tests for scripted events and dialogue
//!
//! These tests verify the story layer end to end:
//! - Contacts unlocking from gameplay (suspicion, money washed)
//! - Dialogue choices gated by conditions, with costs and unlocks
//! - Delayed replies landing in the chat they were meant for

use std::time::Duration;

use mestre::content::Content;
use mestre::core::types::{ContactId, Screen, Sender};
use mestre::{EngineConfig, GameError, GameStore, TickEvent};

fn store_with(dirty: f64, clean: f64, cpfs: u32) -> GameStore {
    let config = EngineConfig {
        starting_dirty: dirty,
        starting_clean: clean,
        starting_identities: cpfs,
        tutorial_enabled: false,
        ..EngineConfig::default()
    };
    GameStore::new(config, Content::standard(), 314).unwrap()
}

fn fired(events: &[TickEvent], id: &str) -> bool {
    events
        .iter()
        .any(|e| matches!(e, TickEvent::ScriptedEvent { id: got } if got == id))
}

#[test]
fn test_hacker_intro_on_day_two() {
    let mut store = store_with(0.0, 0.0, 0);
    let events = store.tick();

    assert!(fired(&events, "meet_hacker"));
    assert_eq!(store.state().unread(ContactId::Hacker), 1);
    assert!(store.state().has_triggered("meet_hacker"));

    let later = store.tick();
    assert!(!fired(&later, "meet_hacker"));
    assert_eq!(store.state().unread(ContactId::Hacker), 1);
}

/// Laundering raises suspicion until the lawyer reaches out
#[test]
fn test_suspicion_brings_the_lawyer() {
    let mut store = store_with(1_000_000.0, 0.0, 0);
    store.buy_cpf(80).unwrap();
    for _ in 0..8 {
        store.confirm_loan(10).unwrap();
    }
    assert!(store.state().suspicion > 15.0);
    assert!(!store.state().is_unlocked(ContactId::Lawyer));

    let events = store.tick();
    assert!(fired(&events, "meet_lawyer"));
    assert!(store.state().is_unlocked(ContactId::Lawyer));
    assert_eq!(store.state().unread(ContactId::Lawyer), 1);

    store.open_chat(ContactId::Lawyer).unwrap();
    assert_eq!(store.state().unread(ContactId::Lawyer), 0);
    // The intro message is already there, so no greeting is added
    assert_eq!(store.state().history(ContactId::Lawyer).len(), 1);
}

/// Lawyer retainer opens the judge path, then the judge reaches out
#[test]
fn test_judge_path() {
    let mut store = store_with(2_000_000.0, 1_000_000.0, 0);
    store.buy_cpf(150).unwrap();
    for _ in 0..15 {
        store.confirm_loan(10).unwrap();
    }
    assert!((store.state().suspicion - 30.0).abs() < 1e-9);
    store.tick();
    assert!(store.state().is_unlocked(ContactId::Lawyer));

    store.open_chat(ContactId::Lawyer).unwrap();
    let offered: Vec<String> = store
        .available_options(ContactId::Lawyer)
        .iter()
        .map(|o| o.id.clone())
        .collect();
    assert!(offered.contains(&"lawyer_retainer".to_string()));
    assert!(!offered.contains(&"lawyer_judge".to_string()));

    store.choose_dialogue_option("lawyer_retainer").unwrap();
    assert_eq!(store.state().clean, 850_000.0);
    store.choose_dialogue_option("lawyer_judge").unwrap();
    assert!(store.state().is_unlocked(ContactId::Judge));

    let events = store.tick();
    assert!(fired(&events, "meet_judge"));
    assert_eq!(store.state().unread(ContactId::Judge), 1);

    let suspicion = store.state().suspicion;
    store.choose_option_for(ContactId::Judge, "judge_favor").unwrap();
    assert_eq!(store.state().clean, 350_000.0);
    assert!((store.state().suspicion - (suspicion - 25.0).max(0.0)).abs() < 1e-9);
}

#[test]
fn test_gated_option_never_mutates() {
    let mut store = store_with(0.0, 100.0, 0);
    store.open_chat(ContactId::DrugDealer).unwrap();
    let before = store.snapshot_json().unwrap();

    let result = store.choose_dialogue_option("dealer_extension");
    assert!(matches!(result, Err(GameError::ConditionNotMet(_))));
    assert_eq!(store.snapshot_json().unwrap(), before);
}

#[test]
fn test_dealer_extension_buys_time() {
    let mut store = store_with(0.0, 200_000.0, 0);
    store.tick();
    store.respond_to_bag(true).unwrap();
    let pressure = store.state().pressure;

    store.open_chat(ContactId::DrugDealer).unwrap();
    store.choose_dialogue_option("dealer_extension").unwrap();

    let state = store.state();
    assert_eq!(state.batches[0].days, 105);
    assert_eq!(state.clean, 100_000.0);
    assert_eq!(state.pressure, pressure + 5.0);
}

#[test]
fn test_each_choice_appends_two_entries() {
    let mut store = store_with(0.0, 0.0, 0);
    store.open_chat(ContactId::Hacker).unwrap();

    for option in ["hacker_prices", "hacker_heat", "hacker_prices"] {
        let before = store.state().history(ContactId::Hacker).len();
        store.choose_dialogue_option(option).unwrap();
        let history = store.state().history(ContactId::Hacker);
        assert_eq!(history.len(), before + 2);
        assert_eq!(history[before].sender, Sender::Player);
        assert_eq!(history[before + 1].sender, Sender::Contact);
    }
}

#[test]
fn test_reply_lands_in_original_chat_after_switching() {
    let mut store = store_with(500_000.0, 0.0, 0);
    store.open_chat(ContactId::Hacker).unwrap();
    store.buy_cpf(10).unwrap();

    store.set_active_screen(Screen::Zep);
    store.open_chat(ContactId::DrugDealer).unwrap();
    let dealer_before = store.state().history(ContactId::DrugDealer).len();

    store.advance_time(Duration::from_secs(1));
    let hacker = store.state().history(ContactId::Hacker);
    assert_eq!(hacker.last().unwrap().sender, Sender::Contact);
    assert_eq!(
        store.state().history(ContactId::DrugDealer).len(),
        dealer_before
    );
}

#[test]
fn test_cancelled_reply_never_arrives() {
    let mut store = store_with(500_000.0, 0.0, 0);
    store.buy_cpf(10).unwrap();
    let before = store.state().history(ContactId::Hacker).len();

    assert_eq!(store.cancel_followups_for(ContactId::Hacker), 1);
    store.advance_time(Duration::from_secs(5));
    assert_eq!(store.state().history(ContactId::Hacker).len(), before);
}

#[test]
fn test_unknown_contact_name() {
    let parsed: Result<ContactId, _> = "banker".parse();
    assert!(matches!(parsed, Err(GameError::UnknownContact(_))));
    assert_eq!("lawyer".parse::<ContactId>().unwrap(), ContactId::Lawyer);
}
