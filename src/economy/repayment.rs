//! Paying the cartel back, oldest batch first

use crate::core::error::{GameError, Result};
use crate::core::types::{ModalKind, Money};
use crate::store::GameStore;

impl GameStore {
    /// Pay as much of the oldest batch as clean money allows.
    ///
    /// Returns the amount paid. Each payment also eases cartel pressure.
    pub fn confirm_pay(&mut self) -> Result<Money> {
        self.ensure_running()?;
        let Some(oldest) = self.state.batches.first() else {
            return Err(GameError::NoOutstandingDebt);
        };

        let amount = self.state.clean.min(oldest.due);
        if amount <= 0.0 {
            return Err(GameError::NothingToPay);
        }

        let batch = &mut self.state.batches[0];
        batch.due -= amount;
        let (batch_id, remaining) = (batch.id, batch.due);
        if remaining <= 0.0 {
            self.state.batches.remove(0);
        }

        self.state.clean -= amount;
        self.state.adjust_pressure(-self.config.repayment_pressure_relief);

        if self.state.modal == ModalKind::Pay {
            self.set_modal(ModalKind::None)?;
        }

        tracing::debug!(?batch_id, amount, remaining, pressure = self.state.pressure, "Repayment");
        Ok(amount)
    }
}
