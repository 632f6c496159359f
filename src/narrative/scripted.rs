//! One-shot story events
//!
//! Each tick walks the event table in order. An event whose trigger holds
//! and whose id is not yet in `events_triggered` applies its payload and is
//! recorded, so it never fires again in the session.

use serde::{Deserialize, Serialize};

use crate::core::types::ContactId;
use crate::narrative::condition::Condition;
use crate::store::GameStore;

/// What a fired event does to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    UnlockContact(ContactId),
    /// Incoming message: unread counter and popup included
    Message { contact: ContactId, text: String },
    UnlockOption(String),
    Multi(Vec<Payload>),
}

impl Payload {
    pub fn message(contact: ContactId, text: &str) -> Self {
        Payload::Message {
            contact,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub id: String,
    pub trigger: Condition,
    pub payload: Payload,
}

impl ScriptedEvent {
    pub fn new(id: &str, trigger: Condition, payload: Payload) -> Self {
        Self {
            id: id.to_string(),
            trigger,
            payload,
        }
    }
}

/// Fire every pending event whose trigger holds. Returns the fired ids in
/// table order.
///
/// Triggers are checked against the state as it stands when each event is
/// reached, so an earlier payload (a contact unlock) can satisfy a later
/// trigger in the same pass.
pub fn evaluate_scripted_events(store: &mut GameStore) -> Vec<String> {
    let content = store.content.clone();
    let mut fired = Vec::new();

    for event in &content.events {
        if store.state.has_triggered(&event.id) || !event.trigger.holds(&store.state) {
            continue;
        }

        store.apply_payload(&event.payload);
        store.state.events_triggered.insert(event.id.clone());
        tracing::debug!(event = %event.id, day = store.state.day, "Scripted event fired");
        fired.push(event.id.clone());
    }

    fired
}

impl GameStore {
    fn apply_payload(&mut self, payload: &Payload) {
        match payload {
            Payload::UnlockContact(contact) => {
                if self.state.unlock_contact(*contact) {
                    tracing::info!(%contact, "Contact unlocked");
                }
            }
            Payload::Message { contact, text } => {
                self.post_incoming(*contact, text.as_str());
            }
            Payload::UnlockOption(option) => {
                self.state.unlocked_dialogue_options.insert(option.clone());
            }
            Payload::Multi(parts) => {
                for part in parts {
                    self.apply_payload(part);
                }
            }
        }
    }
}
