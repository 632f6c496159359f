//! Cartel deliveries: the dealer offers a bag of dirty money, the player
//! accepts it (and owes a batch) or puts it off once.

use crate::core::error::{GameError, Result};
use crate::core::types::{BatchId, ContactId, Money, Sender};
use crate::state::Batch;
use crate::store::GameStore;

pub const ACCEPT_LINE: &str = "Send it.";
pub const ACCEPT_REPLY: &str = "On its way. We want our cut back before the deadline.";
pub const DECLINE_LINE: &str = "Not now.";
pub const DECLINE_REPLY: &str = "Once. Don't make it a habit.";

impl GameStore {
    /// Put a delivery offer in the dealer's chat. Called by the tick.
    pub(crate) fn offer_bag(&mut self, amount: Money) {
        self.state.has_pending_bag = true;
        self.state.pending_bag_amount = amount;
        self.post_incoming(
            ContactId::DrugDealer,
            format!("New bag ready: R$ {:.0}. You in?", amount),
        );
        tracing::debug!(amount, day = self.state.day, "Delivery offered");
    }

    /// Answer the pending delivery offer
    pub fn respond_to_bag(&mut self, accept: bool) -> Result<Option<BatchId>> {
        self.ensure_running()?;
        if !self.state.has_pending_bag {
            return Err(GameError::NoPendingDelivery);
        }
        if !accept && self.state.has_used_not_now {
            return Err(GameError::NotNowExhausted);
        }
        self.ensure_no_reply_pending(ContactId::DrugDealer)?;

        let amount = self.state.pending_bag_amount;
        self.state.has_pending_bag = false;
        self.state.pending_bag_amount = 0.0;

        let delay = self.config.delivery_reply_delay_ms;
        if accept {
            let id = self.ids.batch();
            self.state.dirty += amount;
            self.state.batches.push(Batch {
                id,
                due: amount * self.config.batch_due_ratio,
                days: self.config.batch_term_days,
            });

            self.post_message(ContactId::DrugDealer, Sender::Player, ACCEPT_LINE);
            self.schedule_message(delay, ContactId::DrugDealer, Sender::Contact, ACCEPT_REPLY);
            tracing::info!(?id, amount, "Delivery accepted");
            Ok(Some(id))
        } else {
            self.state.has_used_not_now = true;

            self.post_message(ContactId::DrugDealer, Sender::Player, DECLINE_LINE);
            self.schedule_message(delay, ContactId::DrugDealer, Sender::Contact, DECLINE_REPLY);
            tracing::info!(amount, "Delivery declined");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn store_with_offer() -> GameStore {
        let mut store = GameStore::standard(2);
        store.skip_tutorial();
        store.offer_bag(500_000.0);
        store
    }

    #[test]
    fn test_offer_marks_unread() {
        let store = store_with_offer();
        assert!(store.state().has_pending_bag);
        assert_eq!(store.state().unread(ContactId::DrugDealer), 1);
        assert!(store.state().notification.is_some());
    }

    #[test]
    fn test_accept_creates_batch() {
        let mut store = store_with_offer();
        let id = store.respond_to_bag(true).unwrap().unwrap();

        let state = store.state();
        assert_eq!(state.dirty, 500_000.0);
        assert!(!state.has_pending_bag);
        assert_eq!(state.pending_bag_amount, 0.0);
        assert_eq!(state.batches.len(), 1);
        assert_eq!(state.batches[0].id, id);
        assert!((state.batches[0].due - 350_000.0).abs() < 1e-6);
        assert_eq!(state.batches[0].days, 90);

        let before = store.state().history(ContactId::DrugDealer).len();
        store.advance_time(Duration::from_millis(800));
        let history = store.state().history(ContactId::DrugDealer);
        assert_eq!(history.len(), before + 1);
        assert_eq!(history.last().unwrap().text, ACCEPT_REPLY);
    }

    #[test]
    fn test_not_now_only_once() {
        let mut store = store_with_offer();
        assert_eq!(store.respond_to_bag(false).unwrap(), None);
        assert!(store.state().has_used_not_now);
        assert!(store.state().batches.is_empty());
        assert_eq!(store.state().dirty, 0.0);

        store.offer_bag(500_000.0);
        assert!(matches!(
            store.respond_to_bag(false),
            Err(GameError::NotNowExhausted)
        ));
        assert!(store.state().has_pending_bag);
        store.advance_time(Duration::from_secs(1));
        assert!(store.respond_to_bag(true).is_ok());
    }

    #[test]
    fn test_answer_waits_for_dealer_reply() {
        let mut store = store_with_offer();
        store.respond_to_bag(true).unwrap();
        store.offer_bag(500_000.0);
        let before = store.snapshot_json().unwrap();

        assert!(matches!(
            store.respond_to_bag(true),
            Err(GameError::ReplyPending(ContactId::DrugDealer))
        ));
        assert_eq!(store.snapshot_json().unwrap(), before);

        store.advance_time(Duration::from_secs(1));
        assert!(store.respond_to_bag(true).is_ok());
        assert_eq!(store.state().batches.len(), 2);
    }

    #[test]
    fn test_no_offer() {
        let mut store = GameStore::standard(2);
        assert!(matches!(
            store.respond_to_bag(true),
            Err(GameError::NoPendingDelivery)
        ));
    }
}
