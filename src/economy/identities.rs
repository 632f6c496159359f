//! Buying fake identities (CPFs) from the hacker

use crate::content::IdentityOffer;
use crate::core::error::{GameError, Result};
use crate::core::types::{ContactId, Sender};
use crate::store::GameStore;

pub const TRANSFERRING: &str = "Transferring...";
pub const DONE: &str = "Done.";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient balance.";

impl GameStore {
    /// Buy `quantity` identities with dirty money.
    ///
    /// The exchange is written to the chat that was open when the purchase
    /// was made (the hacker's if none): an immediate player line, then the
    /// seller's confirmation after a short delay. A second purchase is
    /// refused until that confirmation has landed.
    pub fn buy_cpf(&mut self, quantity: u32) -> Result<()> {
        self.ensure_running()?;
        if quantity == 0 {
            return Err(GameError::InvalidQuantity);
        }

        let contact = self.state.current_chat.unwrap_or(ContactId::Hacker);
        self.ensure_no_reply_pending(contact)?;
        let cost = quantity as f64 * self.config.identity_price;

        if self.state.dirty < cost {
            self.post_message(contact, Sender::Player, INSUFFICIENT_FUNDS);
            tracing::debug!(quantity, cost, dirty = self.state.dirty, "Identity purchase rejected");
            return Err(GameError::InsufficientDirty {
                needed: cost,
                available: self.state.dirty,
            });
        }

        self.state.dirty -= cost;
        self.state.cpfs += quantity;

        self.post_message(contact, Sender::Player, TRANSFERRING);
        let delay = self.config.transfer_reply_delay_ms;
        self.schedule_message(delay, contact, Sender::Contact, DONE);

        tracing::debug!(quantity, cost, "Bought identities");
        Ok(())
    }

    /// Identity packs the hacker currently offers
    pub fn identity_offers(&self) -> Vec<IdentityOffer> {
        self.content
            .identity_offers_for(self.state.level_idx)
            .copied()
            .collect()
    }
}
