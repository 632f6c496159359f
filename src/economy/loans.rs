//! Packaging dirty money and identities into sellable debt packs

use crate::core::error::{GameError, Result};
use crate::core::types::{ModalKind, PackId};
use crate::state::DebtPack;
use crate::store::GameStore;

impl GameStore {
    /// Create a debt pack from `size` identities.
    ///
    /// Costs `size × loan_unit_price` dirty money, raises suspicion by
    /// `size × susp_rate`, and closes the loan modal if it was open.
    pub fn confirm_loan(&mut self, size: u32) -> Result<PackId> {
        self.ensure_running()?;
        if size == 0 {
            return Err(GameError::InvalidQuantity);
        }

        let level = self.level();
        let (max_batch, susp_rate) = (level.max_batch, level.susp_rate);
        if size > max_batch {
            return Err(GameError::LoanTooLarge {
                size,
                max: max_batch,
            });
        }

        let cost = size as f64 * self.config.loan_unit_price;
        if self.state.dirty < cost {
            return Err(GameError::InsufficientDirty {
                needed: cost,
                available: self.state.dirty,
            });
        }
        if self.state.cpfs < size {
            return Err(GameError::InsufficientIdentities {
                needed: size,
                available: self.state.cpfs,
            });
        }

        let id = self.ids.pack();
        self.state.dirty -= cost;
        self.state.cpfs -= size;
        self.state.adjust_suspicion(size as f64 * susp_rate);
        self.state.debt_packs.push(DebtPack {
            id,
            value: cost,
            cpfs_used: size,
            day_created: self.state.day,
        });

        if self.state.modal == ModalKind::Loan {
            self.set_modal(ModalKind::None)?;
        }

        tracing::debug!(?id, size, cost, suspicion = self.state.suspicion, "Debt pack created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::core::config::EngineConfig;

    fn store(dirty: f64, cpfs: u32) -> GameStore {
        let config = EngineConfig {
            starting_dirty: dirty,
            starting_identities: cpfs,
            tutorial_enabled: false,
            ..EngineConfig::default()
        };
        GameStore::new(config, Content::standard(), 5).unwrap()
    }

    #[test]
    fn test_loan_creates_pack() {
        let mut store = store(450_000.0, 10);
        let id = store.confirm_loan(10).unwrap();

        let state = store.state();
        assert_eq!(state.dirty, 400_000.0);
        assert_eq!(state.cpfs, 0);
        assert!((state.suspicion - 2.0).abs() < 1e-9);
        assert_eq!(state.debt_packs.len(), 1);
        let pack = state.pack(id).unwrap();
        assert_eq!(pack.value, 50_000.0);
        assert_eq!(pack.cpfs_used, 10);
        assert_eq!(pack.day_created, 1);
    }

    #[test]
    fn test_loan_needs_identities() {
        let mut store = store(450_000.0, 5);
        let result = store.confirm_loan(10);
        assert!(matches!(
            result,
            Err(GameError::InsufficientIdentities { needed: 10, available: 5 })
        ));
        assert_eq!(store.state().dirty, 450_000.0);
        assert!(store.state().debt_packs.is_empty());
    }

    #[test]
    fn test_loan_needs_dirty() {
        let mut store = store(10_000.0, 10);
        assert!(matches!(
            store.confirm_loan(10),
            Err(GameError::InsufficientDirty { .. })
        ));
        assert_eq!(store.state().cpfs, 10);
    }

    #[test]
    fn test_loan_capped_by_level() {
        let mut store = store(1_000_000.0, 50);
        assert!(matches!(
            store.confirm_loan(11),
            Err(GameError::LoanTooLarge { size: 11, max: 10 })
        ));
    }

    #[test]
    fn test_loan_closes_modal() {
        let mut store = store(100_000.0, 10);
        store.set_modal(ModalKind::Loan).unwrap();
        store.confirm_loan(10).unwrap();
        assert_eq!(store.state().modal, ModalKind::None);
        assert!(!store.state().is_paused);
    }

    #[test]
    fn test_pack_ids_unique() {
        let mut store = store(100_000.0, 20);
        let a = store.confirm_loan(5).unwrap();
        let b = store.confirm_loan(5).unwrap();
        assert_ne!(a, b);
    }
}
