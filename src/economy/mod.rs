//! Economy operations - the resource transformation rules
//!
//! dirty money --buy_cpf--> identities
//! dirty money + identities --confirm_loan--> debt pack
//! debt pack --sell_debt_pack--> clean money
//! clean money --confirm_pay--> less cartel debt
//! delivery offer --respond_to_bag--> dirty money + cartel debt
//!
//! Every operation validates balances first and leaves the state untouched
//! when it returns an error.

pub mod delivery;
pub mod identities;
pub mod loans;
pub mod market;
pub mod repayment;

pub use market::generate_offers;
