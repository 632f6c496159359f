//! The single authoritative game snapshot and its record types

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::types::{
    BatchId, ContactId, Day, GameOverReason, MessageId, ModalKind, Money, NotificationId, PackId,
    Screen, Sender,
};

/// Upper bound shared by both failure gauges
pub const GAUGE_MAX: f64 = 100.0;

/// Clamp a gauge value into `[0, GAUGE_MAX]`
pub fn clamp_gauge(value: f64) -> f64 {
    value.clamp(0.0, GAUGE_MAX)
}

/// A debt owed to the cartel for a delivered bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: BatchId,
    /// Amount still owed
    pub due: Money,
    /// Days left before the cartel considers it a default
    pub days: i32,
}

/// A sellable package of fake loans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPack {
    pub id: PackId,
    /// Face value (identities × loan unit price)
    pub value: Money,
    pub cpfs_used: u32,
    pub day_created: Day,
}

/// One bank's bid for a debt pack, valid only while the sell flow is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankOffer {
    pub bank_name: String,
    /// In `[discount_min, discount_max)`
    pub discount_rate: f64,
    pub offer_value: Money,
}

/// The open sell interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellSession {
    pub pack_id: PackId,
    pub offers: Vec<BankOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub day: Day,
    pub sender: Sender,
    pub text: String,
}

/// Transient "new message" popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub contact: ContactId,
    pub text: String,
}

/// Complete mutable game state.
///
/// Fields are public for reading; only the store mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub day: Day,
    pub dirty: Money,
    pub clean: Money,
    pub cpfs: u32,
    pub suspicion: f64,
    pub pressure: f64,
    /// Repayment priority order (oldest first)
    pub batches: Vec<Batch>,
    /// Creation order
    pub debt_packs: Vec<DebtPack>,
    pub level_idx: usize,
    pub total_washed: Money,

    pub contacts: AHashMap<ContactId, bool>,
    pub events_triggered: AHashSet<String>,
    pub chat_history: AHashMap<ContactId, Vec<Message>>,
    pub unread_counts: AHashMap<ContactId, u32>,
    pub unlocked_dialogue_options: AHashSet<String>,

    pub has_pending_bag: bool,
    pub pending_bag_amount: Money,
    pub has_used_not_now: bool,
    pub next_bag_day: Day,

    pub is_game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
    pub game_over_detail: Option<String>,
    pub is_paused: bool,
    /// Day the final level was first reached
    pub final_level_day: Option<Day>,

    pub active_screen: Screen,
    pub modal: ModalKind,
    pub current_chat: Option<ContactId>,
    pub sell: Option<SellSession>,
    pub notification: Option<Notification>,
    pub tutorial_step: usize,
    pub tutorial_active: bool,
}

impl GameState {
    /// Fresh state for a new run
    pub fn initial(config: &EngineConfig) -> Self {
        let contacts = ContactId::ALL
            .into_iter()
            .map(|c| (c, matches!(c, ContactId::DrugDealer | ContactId::Hacker)))
            .collect();

        Self {
            day: 1,
            dirty: config.starting_dirty,
            clean: config.starting_clean,
            cpfs: config.starting_identities,
            suspicion: 0.0,
            pressure: 0.0,
            batches: Vec::new(),
            debt_packs: Vec::new(),
            level_idx: 0,
            total_washed: 0.0,
            contacts,
            events_triggered: AHashSet::new(),
            chat_history: AHashMap::new(),
            unread_counts: AHashMap::new(),
            unlocked_dialogue_options: AHashSet::new(),
            has_pending_bag: false,
            pending_bag_amount: 0.0,
            has_used_not_now: false,
            next_bag_day: config.first_bag_day,
            is_game_over: false,
            game_over_reason: None,
            game_over_detail: None,
            is_paused: config.tutorial_enabled,
            final_level_day: None,
            active_screen: Screen::Bank,
            modal: ModalKind::None,
            current_chat: None,
            sell: None,
            notification: None,
            tutorial_step: 0,
            tutorial_active: config.tutorial_enabled,
        }
    }

    pub fn is_unlocked(&self, contact: ContactId) -> bool {
        self.contacts.get(&contact).copied().unwrap_or(false)
    }

    /// Unlocked contacts in a stable order
    pub fn unlocked_contacts(&self) -> Vec<ContactId> {
        ContactId::ALL
            .into_iter()
            .filter(|c| self.is_unlocked(*c))
            .collect()
    }

    pub fn history(&self, contact: ContactId) -> &[Message] {
        self.chat_history
            .get(&contact)
            .map(|m| m.as_slice())
            .unwrap_or(&[])
    }

    pub fn unread(&self, contact: ContactId) -> u32 {
        self.unread_counts.get(&contact).copied().unwrap_or(0)
    }

    pub fn total_unread(&self) -> u32 {
        self.unread_counts.values().sum()
    }

    pub fn total_due(&self) -> Money {
        self.batches.iter().map(|b| b.due).sum()
    }

    pub fn pack(&self, id: PackId) -> Option<&DebtPack> {
        self.debt_packs.iter().find(|p| p.id == id)
    }

    pub fn oldest_pack(&self) -> Option<&DebtPack> {
        self.debt_packs.first()
    }

    pub fn has_triggered(&self, event_id: &str) -> bool {
        self.events_triggered.contains(event_id)
    }

    pub fn is_option_unlocked(&self, option_id: &str) -> bool {
        self.unlocked_dialogue_options.contains(option_id)
    }

    pub(crate) fn adjust_suspicion(&mut self, delta: f64) {
        self.suspicion = clamp_gauge(self.suspicion + delta);
    }

    pub(crate) fn adjust_pressure(&mut self, delta: f64) {
        self.pressure = clamp_gauge(self.pressure + delta);
    }

    /// Recompute the clock gate from everything that can block it
    pub(crate) fn refresh_pause(&mut self) {
        self.is_paused = self.is_game_over || self.modal != ModalKind::None || self.tutorial_active;
    }

    pub(crate) fn unlock_contact(&mut self, contact: ContactId) -> bool {
        let entry = self.contacts.entry(contact).or_insert(false);
        let newly = !*entry;
        *entry = true;
        newly
    }
}
