//! Engine configuration with documented constants
//!
//! Every economic and pacing number lives here. The defaults reproduce the
//! standard game; a TOML file can override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{GameError, Result};
use crate::core::types::Money;

/// Configuration for the game engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === ECONOMY ===
    /// Price of one fake identity (CPF), paid in dirty money
    pub identity_price: Money,

    /// Face value contributed by each identity consumed in a loan
    ///
    /// A loan of N identities costs N × this in dirty money and produces a
    /// debt pack worth the same amount.
    pub loan_unit_price: Money,

    /// Fraction of a delivered bag owed back to the cartel
    pub batch_due_ratio: f64,

    /// Days the player has to repay a delivered bag
    pub batch_term_days: i32,

    /// Multiplier applied to `cpfs_used × susp_rate` when a pack is sold
    pub sale_suspicion_factor: f64,

    /// Floor on the suspicion added by any sale
    pub min_sale_suspicion: f64,

    /// Lower bound (inclusive) of a bank's discount on a debt pack
    pub discount_min: f64,

    /// Upper bound (exclusive) of a bank's discount on a debt pack
    pub discount_max: f64,

    // === PRESSURE ===
    /// Pressure added when a batch runs out of days unpaid
    pub default_pressure_spike: f64,

    /// A batch with fewer remaining days than this is critical
    pub critical_batch_days: i32,

    /// More outstanding batches than this counts as crowding
    pub crowded_batch_count: usize,

    /// Daily pressure gain while any batch is critical
    pub critical_pressure_rate: f64,

    /// Daily pressure gain while batches are crowded
    pub crowded_pressure_rate: f64,

    /// Daily pressure relief when nothing is urgent
    pub pressure_relief_rate: f64,

    /// Pressure removed by each repayment
    pub repayment_pressure_relief: f64,

    // === DELIVERIES ===
    /// Day of the first cartel delivery offer
    pub first_bag_day: u32,

    /// Random extra days added to each bag interval, drawn from `0..bag_jitter_days`
    pub bag_jitter_days: u32,

    // === REAL-TIME DELAYS ===
    /// Delay before the hacker confirms an identity transfer
    pub transfer_reply_delay_ms: u64,

    /// Delay before the dealer answers a delivery response
    pub delivery_reply_delay_ms: u64,

    /// How long the "new message" popup stays up
    pub notification_ms: u64,

    // === START ===
    pub starting_dirty: Money,
    pub starting_clean: Money,
    pub starting_identities: u32,

    /// Run the tutorial (clock paused) before the first tick
    pub tutorial_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            identity_price: 5000.0,
            loan_unit_price: 5000.0,
            batch_due_ratio: 0.7,
            batch_term_days: 90,
            sale_suspicion_factor: 0.5,
            min_sale_suspicion: 1.0,
            discount_min: 0.10,
            discount_max: 0.20,

            default_pressure_spike: 25.0,
            critical_batch_days: 30,
            crowded_batch_count: 2,
            critical_pressure_rate: 0.5,
            crowded_pressure_rate: 0.1,
            pressure_relief_rate: 0.1,
            repayment_pressure_relief: 10.0,

            first_bag_day: 2,
            bag_jitter_days: 5,

            transfer_reply_delay_ms: 500,
            delivery_reply_delay_ms: 800,
            notification_ms: 3000,

            starting_dirty: 0.0,
            starting_clean: 0.0,
            starting_identities: 0,
            tutorial_enabled: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.identity_price <= 0.0 || self.loan_unit_price <= 0.0 {
            return Err(GameError::Config("prices must be positive".into()));
        }

        if !(0.0..1.0).contains(&self.discount_min) || self.discount_max <= self.discount_min {
            return Err(GameError::Config(format!(
                "discount range [{}, {}) is not a valid sub-range of [0, 1)",
                self.discount_min, self.discount_max
            )));
        }

        if self.discount_max > 1.0 {
            return Err(GameError::Config(format!(
                "discount_max ({}) cannot exceed 1.0",
                self.discount_max
            )));
        }

        if self.batch_term_days <= 0 {
            return Err(GameError::Config("batch_term_days must be positive".into()));
        }

        if self.bag_jitter_days == 0 {
            return Err(GameError::Config("bag_jitter_days must be at least 1".into()));
        }

        if self.starting_dirty < 0.0 || self.starting_clean < 0.0 {
            return Err(GameError::Config("starting balances cannot be negative".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            "starting_dirty = 500000.0\ntutorial_enabled = false\n",
        )
        .unwrap();
        assert_eq!(config.starting_dirty, 500000.0);
        assert!(!config.tutorial_enabled);
        assert_eq!(config.identity_price, 5000.0);
        assert_eq!(config.batch_term_days, 90);
    }

    #[test]
    fn test_inverted_discount_range_rejected() {
        let result = EngineConfig::from_toml_str("discount_min = 0.3\ndiscount_max = 0.2\n");
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_reports_toml_error() {
        let result = EngineConfig::from_toml_str("identity_price = \"cheap\"");
        assert!(matches!(result, Err(GameError::Toml(_))));
    }
}
