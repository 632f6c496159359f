//! Selling debt packs to banks for clean money

use rand::Rng;

use crate::core::config::EngineConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{ModalKind, Money, PackId};
use crate::state::{BankOffer, SellSession};
use crate::store::GameStore;

/// One bid per bank, each with an independent discount in
/// `[discount_min, discount_max)`
pub fn generate_offers<R: Rng>(
    rng: &mut R,
    banks: &[String],
    value: Money,
    config: &EngineConfig,
) -> Vec<BankOffer> {
    banks
        .iter()
        .map(|bank| {
            let discount_rate = rng.gen_range(config.discount_min..config.discount_max);
            BankOffer {
                bank_name: bank.clone(),
                discount_rate,
                offer_value: (value * (1.0 - discount_rate)).floor(),
            }
        })
        .collect()
}

impl GameStore {
    /// Start selling a pack: fresh bids from every bank, clock paused
    pub fn open_sell_modal(&mut self, pack_id: PackId) -> Result<()> {
        self.ensure_running()?;
        let value = self
            .state
            .pack(pack_id)
            .map(|p| p.value)
            .ok_or(GameError::DebtPackNotFound(pack_id))?;

        let offers = generate_offers(&mut self.rng, &self.content.banks, value, &self.config);
        self.set_modal(ModalKind::Sell)?;
        self.state.sell = Some(SellSession { pack_id, offers });

        tracing::debug!(?pack_id, value, "Sell flow opened");
        Ok(())
    }

    /// Bids for the open sell flow
    pub fn bank_offers(&self) -> &[BankOffer] {
        self.state
            .sell
            .as_ref()
            .map(|s| s.offers.as_slice())
            .unwrap_or(&[])
    }

    /// Accept a bid: clean money in, pack gone, clock resumed
    pub fn sell_debt_pack(&mut self, pack_id: PackId, offer_value: Money) -> Result<()> {
        self.ensure_running()?;
        let idx = self
            .state
            .debt_packs
            .iter()
            .position(|p| p.id == pack_id)
            .ok_or(GameError::DebtPackNotFound(pack_id))?;

        let pack = &self.state.debt_packs[idx];
        if !(offer_value > 0.0 && offer_value <= pack.value) {
            return Err(GameError::InvalidOffer {
                offer: offer_value,
                value: pack.value,
            });
        }

        let susp_rate = self.level().susp_rate;
        let pack = self.state.debt_packs.remove(idx);
        let factor = self.config.sale_suspicion_factor;
        let added_suspicion = (pack.cpfs_used as f64 * susp_rate * factor)
            .round()
            .max(self.config.min_sale_suspicion);

        self.state.clean += offer_value;
        self.state.total_washed += offer_value;
        self.state.adjust_suspicion(added_suspicion);
        self.set_modal(ModalKind::None)?;

        tracing::debug!(
            ?pack_id,
            offer_value,
            added_suspicion,
            total_washed = self.state.total_washed,
            "Debt pack sold"
        );
        Ok(())
    }
}
