//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::error::GameError;

/// Simulation day (one per tick)
pub type Day = u32;

/// Currency amount. Balances are whole-ish numbers but due amounts carry fractions.
pub type Money = f64;

/// Unique identifier for a play session, regenerated on restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cartel debt identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BatchId(pub u64);

/// Debt pack identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackId(pub u64);

/// Chat message identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// Deferred task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Notification identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

/// Monotonic id source owned by the store.
///
/// Every record kind draws from the same counter, so ids never collide even
/// when several records are created within the same instant.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    fn bump(&mut self) -> u64 {
        let id = self.next.max(1);
        self.next = id + 1;
        id
    }

    pub fn batch(&mut self) -> BatchId {
        BatchId(self.bump())
    }

    pub fn pack(&mut self) -> PackId {
        PackId(self.bump())
    }

    pub fn message(&mut self) -> MessageId {
        MessageId(self.bump())
    }

    pub fn task(&mut self) -> TaskId {
        TaskId(self.bump())
    }

    pub fn notification(&mut self) -> NotificationId {
        NotificationId(self.bump())
    }
}

/// Every character the player can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContactId {
    DrugDealer,
    Hacker,
    Lawyer,
    Judge,
    Deputy,
}

impl ContactId {
    pub const ALL: [ContactId; 5] = [
        ContactId::DrugDealer,
        ContactId::Hacker,
        ContactId::Lawyer,
        ContactId::Judge,
        ContactId::Deputy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactId::DrugDealer => "drugdealer",
            ContactId::Hacker => "hacker",
            ContactId::Lawyer => "lawyer",
            ContactId::Judge => "judge",
            ContactId::Deputy => "deputy",
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ContactId::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| GameError::UnknownContact(s.to_string()))
    }
}

/// Top-level screens of the phone UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Bank,
    Zep,
    Chat,
}

/// Blocking modal flows. Any modal other than `None` pauses the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModalKind {
    #[default]
    None,
    Loan,
    Pay,
    Message,
    Sell,
}

/// Who wrote a chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    Player,
    Contact,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Suspicion reached the ceiling
    Police,
    /// Cartel pressure reached the ceiling
    Cartel,
}
