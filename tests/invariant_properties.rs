//! Property tests over random operation sequences
//!
//! Whatever the player does, balances never go negative and both gauges
//! stay inside [0, 100].

use std::time::Duration;

use mestre::content::Content;
use mestre::core::types::ContactId;
use mestre::{EngineConfig, GameState, GameStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Tick(u8),
    Buy(u32),
    Loan(u32),
    Sell(usize),
    Pay,
    Bag(bool),
    Say(usize, usize),
    Wait(u16),
    Restart,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1_u8..30).prop_map(Op::Tick),
        3 => (0_u32..120).prop_map(Op::Buy),
        3 => (0_u32..120).prop_map(Op::Loan),
        3 => (0_usize..6).prop_map(Op::Sell),
        2 => Just(Op::Pay),
        2 => any::<bool>().prop_map(Op::Bag),
        2 => ((0_usize..5), (0_usize..4)).prop_map(|(c, o)| Op::Say(c, o)),
        1 => (0_u16..3000).prop_map(Op::Wait),
        1 => Just(Op::Restart),
    ]
}

fn apply(store: &mut GameStore, op: &Op) {
    match op {
        Op::Tick(n) => {
            for _ in 0..*n {
                store.tick();
            }
        }
        Op::Buy(n) => {
            store.buy_cpf(*n).ok();
        }
        Op::Loan(n) => {
            store.confirm_loan(*n).ok();
        }
        Op::Sell(bid) => {
            if let Some(pack) = store.state().oldest_pack().map(|p| p.id) {
                if store.open_sell_modal(pack).is_ok() {
                    let value = store.bank_offers().get(*bid).map(|o| o.offer_value);
                    match value {
                        Some(value) => {
                            store.sell_debt_pack(pack, value).ok();
                        }
                        None => {
                            store.set_modal(mestre::ModalKind::None).ok();
                        }
                    }
                }
            }
        }
        Op::Pay => {
            store.confirm_pay().ok();
        }
        Op::Bag(accept) => {
            store.respond_to_bag(*accept).ok();
        }
        Op::Say(contact, option) => {
            let contact = ContactId::ALL[*contact];
            let id = store
                .content()
                .dialogue
                .options(contact)
                .get(*option)
                .map(|o| o.id.clone());
            if let Some(id) = id {
                store.choose_option_for(contact, &id).ok();
            }
        }
        Op::Wait(ms) => {
            store.advance_time(Duration::from_millis(u64::from(*ms)));
        }
        Op::Restart => store.restart_game(),
    }
}

fn check(state: &GameState) -> Result<(), TestCaseError> {
    prop_assert!(state.dirty >= 0.0, "dirty {}", state.dirty);
    prop_assert!(state.clean >= 0.0, "clean {}", state.clean);
    prop_assert!((0.0..=100.0).contains(&state.suspicion), "suspicion {}", state.suspicion);
    prop_assert!((0.0..=100.0).contains(&state.pressure), "pressure {}", state.pressure);
    prop_assert!(state.batches.iter().all(|b| b.due > 0.0 && b.days > 0));
    Ok(())
}

proptest! {
    #[test]
    fn property_balances_and_gauges_hold(
        seed in any::<u64>(),
        dirty in 0_u32..3_000_000,
        ops in prop::collection::vec(op(), 1..60),
    ) {
        let config = EngineConfig {
            starting_dirty: f64::from(dirty),
            tutorial_enabled: false,
            ..EngineConfig::default()
        };
        let mut store = GameStore::new(config, Content::standard(), seed).unwrap();

        for op in &ops {
            apply(&mut store, op);
            check(store.state())?;
        }
    }

    #[test]
    fn property_game_over_is_final(
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let config = EngineConfig {
            starting_dirty: 5_000_000.0,
            tutorial_enabled: false,
            ..EngineConfig::default()
        };
        let mut store = GameStore::new(config, Content::standard(), seed).unwrap();
        store.buy_cpf(500).unwrap();
        while store.confirm_loan(10).is_ok() {}
        store.tick();
        prop_assert!(store.state().is_game_over);

        let frozen = store.snapshot_json().unwrap();
        for op in ops.iter().filter(|op| !matches!(op, Op::Restart | Op::Wait(_))) {
            apply(&mut store, op);
            prop_assert_eq!(store.snapshot_json().unwrap(), frozen.clone());
        }
    }

    #[test]
    fn property_same_seed_same_run(
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let config = EngineConfig {
            starting_dirty: 1_000_000.0,
            tutorial_enabled: false,
            ..EngineConfig::default()
        };
        let mut a = GameStore::new(config.clone(), Content::standard(), seed).unwrap();
        let mut b = GameStore::new(config, Content::standard(), seed).unwrap();

        for op in &ops {
            apply(&mut a, op);
            apply(&mut b, op);
        }
        prop_assert_eq!(a.state().day, b.state().day);
        prop_assert_eq!(a.state().dirty, b.state().dirty);
        prop_assert_eq!(a.state().clean, b.state().clean);
        prop_assert_eq!(a.state().next_bag_day, b.state().next_bag_day);
    }
}
