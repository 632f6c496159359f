//! Mestre - Money-laundering management game engine
//!
//! A deterministic, tick-driven simulation over a single `GameState`:
//! economy operations turn dirty money into clean money, two gauges
//! (suspicion and cartel pressure) end the run when full, and scripted
//! events plus contact dialogue drive the story.

pub mod content;
pub mod core;
pub mod economy;
pub mod narrative;
pub mod simulation;
pub mod state;
pub mod store;

pub use crate::core::{EngineConfig, GameError, Result};
pub use crate::core::types::{ContactId, GameOverReason, ModalKind, Screen, Sender};
pub use content::Content;
pub use simulation::TickEvent;
pub use state::GameState;
pub use store::GameStore;
