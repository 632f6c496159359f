//! Chat history, unread counters and the new-message popup

use crate::core::types::{ContactId, MessageId, Sender, TaskId};
use crate::state::{Message, Notification};
use crate::store::schedule::DeferredAction;
use crate::store::GameStore;

impl GameStore {
    /// Append a line to a contact's history
    pub(crate) fn post_message(
        &mut self,
        contact: ContactId,
        sender: Sender,
        text: impl Into<String>,
    ) -> MessageId {
        let id = self.ids.message();
        let message = Message {
            id,
            day: self.state.day,
            sender,
            text: text.into(),
        };
        self.state
            .chat_history
            .entry(contact)
            .or_default()
            .push(message);
        id
    }

    /// Append a line from the contact, mark it unread and flash the popup
    pub(crate) fn post_incoming(
        &mut self,
        contact: ContactId,
        text: impl Into<String>,
    ) -> MessageId {
        let text = text.into();
        let id = self.post_message(contact, Sender::Contact, text.clone());
        *self.state.unread_counts.entry(contact).or_insert(0) += 1;
        self.flash_notification(contact, text);
        id
    }

    pub(crate) fn flash_notification(&mut self, contact: ContactId, text: String) {
        let id = self.ids.notification();
        self.state.notification = Some(Notification { id, contact, text });

        let task = self.ids.task();
        self.scheduler.schedule(
            task,
            self.config.notification_ms,
            DeferredAction::ExpireNotification { notification: id },
        );
    }

    /// Queue a chat line for later. The target contact is fixed now.
    pub(crate) fn schedule_message(
        &mut self,
        delay_ms: u64,
        contact: ContactId,
        sender: Sender,
        text: impl Into<String>,
    ) -> TaskId {
        let task = self.ids.task();
        self.scheduler.schedule(
            task,
            delay_ms,
            DeferredAction::DeliverMessage {
                contact,
                sender,
                text: text.into(),
            },
        );
        task
    }

    pub(crate) fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::DeliverMessage {
                contact,
                sender,
                text,
            } => {
                tracing::debug!(%contact, "Delivering deferred message");
                self.post_message(contact, sender, text);
            }
            DeferredAction::ExpireNotification { notification } => {
                if self
                    .state
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.id == notification)
                {
                    self.state.notification = None;
                }
            }
        }
    }
}
