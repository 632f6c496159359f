//! Automated playtester - runs the engine with a simple strategy and reports
//! on how the run went
//!
//! This is a headless test that plays the way a cautious player would:
//! take every bag, wash in level-sized batches while suspicion allows, sell
//! at the best bid, pay debts before they turn critical and buy protection
//! when the heat rises.

use std::time::Duration;

use clap::Parser;
use mestre::core::types::ContactId;
use mestre::{EngineConfig, GameError, GameStore, TickEvent};

/// Suspicion above which the bot stops creating new debt packs
const WASH_CEILING: f64 = 70.0;
/// Days left on the oldest batch before the bot pays it down
const PAY_WINDOW: i32 = 35;

/// Headless playtester
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Play a full run with a scripted strategy and report the outcome")]
struct Args {
    /// Days to simulate before giving up
    #[arg(long, default_value_t = 720)]
    days: u32,

    /// Random seed for deterministic runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log filter directive
    #[arg(long, default_value = "mestre=warn")]
    log: String,
}

#[derive(Debug, Default)]
struct Metrics {
    bags_accepted: u32,
    packs_created: u32,
    packs_sold: u32,
    payments: u32,
    defaults: u32,
    bribes: u32,
    rejected: u32,
    level_ups: Vec<(u32, String)>,
    scripted: Vec<(u32, String)>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log))
        .init();

    println!("=== Mestre Automated Playtest ===\n");

    let config = EngineConfig {
        tutorial_enabled: false,
        ..EngineConfig::default()
    };
    let mut store = match GameStore::new(config, mestre::Content::standard(), args.seed) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Could not start: {}", e);
            return;
        }
    };
    let mut metrics = Metrics::default();

    println!("Seed {}, running up to {} days...\n", args.seed, args.days);

    for _ in 0..args.days {
        play_turn(&mut store, &mut metrics);

        for event in store.tick() {
            let day = store.state().day;
            match event {
                TickEvent::BatchDefaulted { unpaid, .. } => {
                    metrics.defaults += 1;
                    println!("[Day {}] Batch defaulted, R$ {:.0} unpaid", day, unpaid);
                }
                TickEvent::LevelUp { name, .. } => {
                    println!("[Day {}] Level up: {}", day, name);
                    metrics.level_ups.push((day, name));
                }
                TickEvent::ScriptedEvent { id } => metrics.scripted.push((day, id)),
                TickEvent::GameOver { reason } => {
                    println!("\n[Day {}] Game Over: {:?}", day, reason);
                }
                TickEvent::BagOffered { .. } => {}
            }
        }

        // One second of real time per day
        store.advance_time(Duration::from_secs(1));

        if store.state().is_game_over {
            break;
        }
    }

    print_report(&store, &metrics);
}

fn play_turn(store: &mut GameStore, metrics: &mut Metrics) {
    if store.state().has_pending_bag && store.respond_to_bag(true).is_ok() {
        metrics.bags_accepted += 1;
    }

    if store.state().suspicion < WASH_CEILING {
        let per_identity = store.config().identity_price + store.config().loan_unit_price;
        let affordable = (store.state().dirty / per_identity) as u32;
        let size = affordable.min(store.level().max_batch);
        if size > 0 {
            let bought = store.buy_cpf(size);
            match bought.and_then(|_| store.confirm_loan(size)) {
                Ok(_) => metrics.packs_created += 1,
                Err(_) => metrics.rejected += 1,
            }
        }
    }

    while let Some(pack) = store.state().oldest_pack().map(|p| p.id) {
        let sold = store.open_sell_modal(pack).and_then(|_| {
            let best = store
                .bank_offers()
                .iter()
                .map(|o| o.offer_value)
                .fold(0.0, f64::max);
            store.sell_debt_pack(pack, best)
        });
        match sold {
            Ok(()) => metrics.packs_sold += 1,
            Err(_) => {
                metrics.rejected += 1;
                break;
            }
        }
    }

    let due_soon = store
        .state()
        .batches
        .first()
        .is_some_and(|b| b.days <= PAY_WINDOW);
    if due_soon || store.state().pressure > 50.0 {
        match store.confirm_pay() {
            Ok(_) => metrics.payments += 1,
            Err(GameError::NothingToPay) => {}
            Err(_) => metrics.rejected += 1,
        }
    }

    if store.state().suspicion > 40.0 {
        buy_protection(store, metrics);
    }
}

/// Spend clean money on whichever contact can lower the heat right now
fn buy_protection(store: &mut GameStore, metrics: &mut Metrics) {
    let wanted = [
        (ContactId::Judge, "judge_favor"),
        (ContactId::Lawyer, "lawyer_judge"),
        (ContactId::Lawyer, "lawyer_retainer"),
        (ContactId::Hacker, "hacker_wipe_logs"),
    ];
    for (contact, option) in wanted {
        let available = store
            .available_options(contact)
            .iter()
            .any(|o| o.id == option);
        if available && store.choose_option_for(contact, option).is_ok() {
            metrics.bribes += 1;
            return;
        }
    }
}

fn print_report(store: &GameStore, metrics: &Metrics) {
    let state = store.state();

    println!("\n=== PLAYTEST REPORT ===\n");

    println!("## Outcome");
    match state.game_over_reason {
        Some(reason) => {
            let (title, detail) = mestre::content::ending(reason);
            println!("Result: {} on day {} ({})", title, state.day, detail);
        }
        None if store.is_final_level() => {
            println!("Result: REACHED {} (day {:?})", store.level().name, state.final_level_day);
        }
        None => println!("Result: IN PROGRESS (stopped on day {})", state.day),
    }
    println!("Level: {}", store.level().name);
    println!("Total washed: R$ {:.0}", state.total_washed);
    println!(
        "Balances: dirty R$ {:.0}, clean R$ {:.0}, {} CPFs",
        state.dirty, state.clean, state.cpfs
    );
    println!(
        "Gauges: suspicion {:.1}%, pressure {:.1}%",
        state.suspicion, state.pressure
    );
    println!(
        "Open debt: R$ {:.0} across {} batch(es)",
        state.total_due(),
        state.batches.len()
    );

    println!("\n## Activity");
    println!("Bags accepted: {}", metrics.bags_accepted);
    println!("Packs created/sold: {}/{}", metrics.packs_created, metrics.packs_sold);
    println!("Payments: {}", metrics.payments);
    println!("Defaults: {}", metrics.defaults);
    println!("Bribes: {}", metrics.bribes);
    println!("Rejected operations: {}", metrics.rejected);

    println!("\n## Story");
    for (day, name) in &metrics.level_ups {
        println!("  day {:>4}: promoted to {}", day, name);
    }
    for (day, id) in &metrics.scripted {
        println!("  day {:>4}: {}", day, id);
    }
    println!(
        "Contacts unlocked: {:?}",
        state.unlocked_contacts()
    );
}
