use thiserror::Error;

use crate::core::types::{ContactId, Money, PackId};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Insufficient dirty money: need {needed}, have {available}")]
    InsufficientDirty { needed: Money, available: Money },

    #[error("Insufficient clean money: need {needed}, have {available}")]
    InsufficientClean { needed: Money, available: Money },

    #[error("Insufficient identities: need {needed}, have {available}")]
    InsufficientIdentities { needed: u32, available: u32 },

    #[error("Loan of {size} identities exceeds level limit of {max}")]
    LoanTooLarge { size: u32, max: u32 },

    #[error("Quantity must be positive")]
    InvalidQuantity,

    #[error("Offer {offer} is not valid for a pack worth {value}")]
    InvalidOffer { offer: Money, value: Money },

    #[error("Debt pack not found: {0:?}")]
    DebtPackNotFound(PackId),

    #[error("No outstanding cartel debt")]
    NoOutstandingDebt,

    #[error("Nothing available to pay")]
    NothingToPay,

    #[error("No delivery offer is pending")]
    NoPendingDelivery,

    #[error("The 'not now' answer was already used")]
    NotNowExhausted,

    #[error("Unknown contact: {0}")]
    UnknownContact(String),

    #[error("Contact is not unlocked yet: {0}")]
    ContactLocked(ContactId),

    #[error("Still waiting on a reply from {0}")]
    ReplyPending(ContactId),

    #[error("No chat is open")]
    NoActiveChat,

    #[error("Unknown dialogue option {option} for {contact}")]
    UnknownOption { contact: ContactId, option: String },

    #[error("Dialogue option unavailable: {0}")]
    ConditionNotMet(String),

    #[error("The game is over")]
    GameOver,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
