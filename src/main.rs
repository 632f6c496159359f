//! Mestre - Entry Point
//!
//! Terminal driver for the engine. Every line read is one command; the
//! clock only moves on `tick`/`run`, while real time between commands is
//! fed to the store so delayed chat replies arrive.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use mestre::content::{load_levels, profile, Content};
use mestre::core::error::Result;
use mestre::core::types::{ContactId, PackId, Sender};
use mestre::{EngineConfig, GameStore, ModalKind, Screen, TickEvent};

/// Mestre - launder the cartel's money without getting caught
#[derive(Parser, Debug)]
#[command(name = "mestre")]
struct Args {
    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Level table to load instead of the built-in one (TOML)
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Engine tuning overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start the clock immediately
    #[arg(long)]
    no_tutorial: bool,

    /// Log filter directive
    #[arg(long, default_value = "mestre=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.no_tutorial {
        config.tutorial_enabled = false;
    }

    let mut content = Content::standard();
    if let Some(path) = &args.levels {
        content = content.with_levels(load_levels(path)?)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut store = GameStore::new(config, content, seed)?;

    println!("\n=== MESTRE ===");
    println!("The cartel's money is dirty. Make it clean. Seed {}", seed);
    print_help();

    let mut last_input = Instant::now();
    loop {
        display_status(&store);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        // Replies scheduled before this command land first
        let now = Instant::now();
        store.advance_time(now - last_input);
        last_input = now;

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "help" | "h" => print_help(),
            "status" | "s" => display_detailed_status(&store),
            "tick" | "t" => run_ticks(&mut store, 1),
            "run" => match arg.and_then(|a| a.parse::<u32>().ok()) {
                Some(n) => run_ticks(&mut store, n),
                None => println!("Usage: run <days>"),
            },
            "buy" => match arg.and_then(|a| a.parse::<u32>().ok()) {
                Some(n) => report(store.buy_cpf(n).map(|_| format!("Bought {} identities.", n))),
                None => {
                    for offer in store.identity_offers() {
                        println!("  buy {}", offer.quantity);
                    }
                }
            },
            "loan" => match arg.and_then(|a| a.parse::<u32>().ok()) {
                Some(n) => report(
                    store
                        .confirm_loan(n)
                        .map(|id| format!("Debt pack {} created.", id.0)),
                ),
                None => println!("Usage: loan <identities> (max {})", store.level().max_batch),
            },
            "sell" => {
                let pack = match arg.and_then(|a| a.parse::<u64>().ok()) {
                    Some(id) => Some(PackId(id)),
                    None => store.state().oldest_pack().map(|p| p.id),
                };
                match pack {
                    Some(id) => {
                        report(store.open_sell_modal(id).map(|_| "Bids:".to_string()));
                        for (i, offer) in store.bank_offers().iter().enumerate() {
                            println!(
                                "  take {} - {} pays R$ {:.0} (-{:.0}%)",
                                i,
                                offer.bank_name,
                                offer.offer_value,
                                offer.discount_rate * 100.0
                            );
                        }
                    }
                    None => println!("No debt packs to sell."),
                }
            }
            "take" => {
                let chosen = arg
                    .and_then(|a| a.parse::<usize>().ok())
                    .and_then(|i| store.bank_offers().get(i).cloned());
                let pack = store.state().sell.as_ref().map(|s| s.pack_id);
                match (pack, chosen) {
                    (Some(pack), Some(offer)) => report(
                        store
                            .sell_debt_pack(pack, offer.offer_value)
                            .map(|_| format!("Sold to {}.", offer.bank_name)),
                    ),
                    _ => println!("Usage: sell, then take <bid>"),
                }
            }
            "cancel" => report(store.set_modal(ModalKind::None).map(|_| "Closed.".to_string())),
            "pay" => report(store.confirm_pay().map(|paid| format!("Paid R$ {:.0}.", paid))),
            "accept" => report(store.respond_to_bag(true).map(|_| "Bag accepted.".to_string())),
            "decline" => report(store.respond_to_bag(false).map(|_| "Not now.".to_string())),
            "zep" => {
                store.set_active_screen(Screen::Zep);
                for contact in store.state().unlocked_contacts() {
                    let p = profile(contact);
                    println!(
                        "  {:<12} {} ({}) [{} unread]",
                        contact,
                        p.name,
                        p.role,
                        store.state().unread(contact)
                    );
                }
            }
            "chat" => match arg.map(ContactId::from_str) {
                Some(Ok(contact)) => match store.open_chat(contact) {
                    Ok(()) => display_chat(&store, contact),
                    Err(e) => println!("{}", e),
                },
                Some(Err(e)) => println!("{}", e),
                None => println!("Usage: chat <contact>"),
            },
            "options" | "o" => match store.state().current_chat {
                Some(contact) => {
                    for option in store.available_options(contact) {
                        println!("  say {} - \"{}\"", option.id, option.text);
                    }
                }
                None => println!("Open a chat first."),
            },
            "say" => match arg {
                Some(option) => match store.choose_dialogue_option(option) {
                    Ok(reply) => println!("  < {}", reply),
                    Err(e) => println!("{}", e),
                },
                None => println!("Usage: say <option>"),
            },
            "back" => store.set_active_screen(Screen::Bank),
            "next" => store.advance_tutorial(),
            "skip" => store.skip_tutorial(),
            "dismiss" => store.dismiss_notification(),
            "restart" => {
                store.restart_game();
                println!("New game.");
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }

    println!(
        "\nGoodbye! Day {}, R$ {:.0} washed.",
        store.state().day,
        store.state().total_washed
    );
    Ok(())
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  tick / t         - Advance one day");
    println!("  run <n>          - Advance n days");
    println!("  status / s       - Show balances, batches and packs");
    println!("  buy [n]          - Buy n identities (list packs without n)");
    println!("  loan <n>         - Turn n identities into a debt pack");
    println!("  sell [pack]      - Ask the banks for bids (oldest pack by default)");
    println!("  take <bid>       - Accept a bid");
    println!("  cancel           - Close the open dialog");
    println!("  pay              - Pay the oldest cartel batch");
    println!("  accept / decline - Answer the dealer's delivery");
    println!("  zep              - List contacts");
    println!("  chat <contact>   - Open a chat");
    println!("  options / o      - Show what you can say");
    println!("  say <option>     - Say it");
    println!("  back             - Leave the chat");
    println!("  next / skip      - Step through or skip the tutorial");
    println!("  restart          - Start over");
    println!("  quit / q         - Exit");
    println!();
}

fn report(result: Result<String>) {
    match result {
        Ok(msg) => println!("{}", msg),
        Err(e) => println!("Rejected: {}", e),
    }
}

fn run_ticks(store: &mut GameStore, days: u32) {
    for _ in 0..days {
        for event in store.tick() {
            match event {
                TickEvent::BagOffered { amount } => {
                    println!("[Day {}] New bag offered: R$ {:.0}", store.state().day, amount)
                }
                TickEvent::BatchDefaulted { unpaid, .. } => println!(
                    "[Day {}] Missed a cartel deadline (R$ {:.0} unpaid)",
                    store.state().day,
                    unpaid
                ),
                TickEvent::LevelUp { name, .. } => {
                    println!("[Day {}] Promoted to {}", store.state().day, name)
                }
                TickEvent::ScriptedEvent { .. } => {}
                TickEvent::GameOver { reason } => {
                    let (title, detail) = mestre::content::ending(reason);
                    println!("\n*** {} ***\n{}", title, detail);
                }
            }
        }
        if store.state().is_paused {
            break;
        }
    }
}

/// Display a brief status summary
fn display_status(store: &GameStore) {
    let state = store.state();
    println!();
    println!(
        "--- Day {} | {} | Dirty R$ {:.0} | Clean R$ {:.0} | CPFs {} | Suspicion {:.0}% | Pressure {:.0}% ---",
        state.day,
        store.level().name,
        state.dirty,
        state.clean,
        state.cpfs,
        state.suspicion,
        state.pressure
    );

    if let Some(step) = store.tutorial_step() {
        println!("  [tutorial] {}  (next / skip)", step.text);
    }
    if let Some(popup) = &state.notification {
        println!("  [{}] {}", profile(popup.contact).name, popup.text);
    }
    if state.has_pending_bag {
        println!("  Delivery waiting: R$ {:.0} (accept / decline)", state.pending_bag_amount);
    }
    if state.total_unread() > 0 {
        println!("  {} unread message(s)", state.total_unread());
    }
    if state.is_game_over {
        println!("  GAME OVER - type 'restart' to play again");
    }
}

/// Display balances, debts and packs
fn display_detailed_status(store: &GameStore) {
    let state = store.state();
    let level = store.level();
    println!();
    println!("=== Day {} ===", state.day);
    match level.goal {
        Some(goal) => println!("Level: {} (goal R$ {:.0} clean)", level.name, goal),
        None => println!("Level: {}", level.name),
    }
    println!("Total washed: R$ {:.0}", state.total_washed);
    println!();

    println!("Cartel batches (R$ {:.0} due):", state.total_due());
    for batch in &state.batches {
        println!("  #{} R$ {:.0} in {} days", batch.id.0, batch.due, batch.days);
    }
    println!("Debt packs:");
    for pack in &state.debt_packs {
        println!(
            "  #{} R$ {:.0} ({} CPFs, day {})",
            pack.id.0, pack.value, pack.cpfs_used, pack.day_created
        );
    }
    println!();
}

fn display_chat(store: &GameStore, contact: ContactId) {
    let p = profile(contact);
    println!();
    println!("=== {} - {} ===", p.name, p.role);
    for message in store.state().history(contact) {
        let who = match message.sender {
            Sender::Player => "you",
            Sender::Contact => p.name,
        };
        println!("  [day {}] {}: {}", message.day, who, message.text);
    }
}
