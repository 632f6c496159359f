//! Narrative layer - conditions, effects, scripted events and dialogue
//!
//! Content tables describe story beats as data (`Condition`, `Effect`,
//! `Payload`, `Reply`); this module interprets them against the store.

pub mod condition;
pub mod dialogue;
pub mod effect;
pub mod scripted;

pub use condition::Condition;
pub use dialogue::{DialogueOption, Reply};
pub use effect::Effect;
pub use scripted::{evaluate_scripted_events, Payload, ScriptedEvent};
