//! Deferred continuations on a virtual millisecond clock
//!
//! A task captures its target (contact, text) by value when scheduled. It
//! fires once the clock has advanced past its due time, regardless of what
//! the player is looking at by then. Tasks can be cancelled explicitly.

use crate::core::types::{ContactId, NotificationId, Sender, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    /// Append a chat line to a specific contact's history
    DeliverMessage {
        contact: ContactId,
        sender: Sender,
        text: String,
    },
    /// Take down a popup, unless a newer one replaced it
    ExpireNotification { notification: NotificationId },
}

impl DeferredAction {
    fn contact(&self) -> Option<ContactId> {
        match self {
            DeferredAction::DeliverMessage { contact, .. } => Some(*contact),
            DeferredAction::ExpireNotification { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deferred {
    pub id: TaskId,
    pub due_ms: u64,
    pub action: DeferredAction,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    queue: Vec<Deferred>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&mut self, id: TaskId, delay_ms: u64, action: DeferredAction) {
        self.queue.push(Deferred {
            id,
            due_ms: self.now_ms + delay_ms,
            action,
        });
    }

    /// Whether a chat line is still queued for a contact
    pub fn has_message_for(&self, contact: ContactId) -> bool {
        self.queue.iter().any(|d| d.action.contact() == Some(contact))
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|d| d.id != id);
        self.queue.len() != before
    }

    /// Cancel every message task bound for a contact
    pub fn cancel_for_contact(&mut self, contact: ContactId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|d| d.action.contact() != Some(contact));
        before - self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Move the clock forward and take every task that became due,
    /// ordered by due time then scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Deferred> {
        self.now_ms += elapsed_ms;
        let now = self.now_ms;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|d| d.due_ms <= now);
        self.queue = rest;

        due.sort_by_key(|d| (d.due_ms, d.id));
        due
    }
}
