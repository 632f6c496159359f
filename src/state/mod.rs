//! Game state aggregate

pub mod game_state;

pub use game_state::{
    clamp_gauge, BankOffer, Batch, DebtPack, GameState, Message, Notification, SellSession,
    GAUGE_MAX,
};
