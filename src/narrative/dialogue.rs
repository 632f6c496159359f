//! Dialogue engine
//!
//! A chosen option resolves into a player line, a contact reply and an
//! effect on the state. Options whose condition fails are hidden from the
//! option list and rejected again here in case the caller held a stale list.

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::core::error::{GameError, Result};
use crate::core::types::{ContactId, Sender};
use crate::narrative::condition::Condition;
use crate::narrative::effect::Effect;
use crate::state::GameState;
use crate::store::GameStore;

/// How a contact answers an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    /// Suspicion and pressure readout
    HeatReport,
    /// Outstanding cartel batches
    DebtReport,
    /// Current rank and the next goal
    LevelReport,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }

    /// Render against the state as it was when the option was chosen
    pub fn render(&self, state: &GameState, content: &Content) -> String {
        match self {
            Reply::Text(text) => text.clone(),
            Reply::HeatReport => {
                let mood = match state.suspicion {
                    s if s >= 75.0 => "They're building a case.",
                    s if s >= 40.0 => "People are asking questions.",
                    _ => "Quiet for now.",
                };
                format!(
                    "Suspicion {:.0}%, cartel pressure {:.0}%. {}",
                    state.suspicion, state.pressure, mood
                )
            }
            Reply::DebtReport => match state.batches.iter().map(|b| b.days).min() {
                None => "You're square with us. For now.".to_string(),
                Some(days) => format!(
                    "You owe R$ {:.0} across {} bag(s). Next deadline in {} days.",
                    state.total_due(),
                    state.batches.len(),
                    days
                ),
            },
            Reply::LevelReport => {
                let level = content.level(state.level_idx);
                match level.goal {
                    Some(goal) => format!(
                        "You're {} now. Get R$ {:.0} clean and we'll talk.",
                        level.name, goal
                    ),
                    None => format!("You're {}. There's nowhere higher.", level.name),
                }
            }
        }
    }
}

/// One outgoing line the player can pick in a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueOption {
    pub id: String,
    /// The player's line
    pub text: String,
    #[serde(default)]
    pub condition: Option<Condition>,
    pub reply: Reply,
    #[serde(default)]
    pub effect: Effect,
    /// Option ids made available once this one is chosen
    #[serde(default)]
    pub unlocks: Vec<String>,
}

impl DialogueOption {
    pub fn new(id: &str, text: &str, reply: Reply) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            condition: None,
            reply,
            effect: Effect::Nothing,
            unlocks: Vec::new(),
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    pub fn unlocking(mut self, ids: &[&str]) -> Self {
        self.unlocks.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn is_available(&self, state: &GameState) -> bool {
        self.condition.as_ref().map_or(true, |c| c.holds(state))
    }
}

impl GameStore {
    /// Options the player may pick right now in this contact's chat
    pub fn available_options(&self, contact: ContactId) -> Vec<&DialogueOption> {
        if !self.state.is_unlocked(contact) {
            return Vec::new();
        }
        self.content
            .dialogue
            .options(contact)
            .iter()
            .filter(|o| o.is_available(&self.state))
            .collect()
    }

    /// Pick an option in the open chat. Returns the contact's reply.
    pub fn choose_dialogue_option(&mut self, option_id: &str) -> Result<String> {
        let contact = self.state.current_chat.ok_or(GameError::NoActiveChat)?;
        self.choose_option_for(contact, option_id)
    }

    pub fn choose_option_for(&mut self, contact: ContactId, option_id: &str) -> Result<String> {
        self.ensure_running()?;
        if !self.state.is_unlocked(contact) {
            return Err(GameError::ContactLocked(contact));
        }

        let content = self.content.clone();
        let option = content
            .dialogue
            .find(contact, option_id)
            .ok_or_else(|| GameError::UnknownOption {
                contact,
                option: option_id.to_string(),
            })?;

        if !option.is_available(&self.state) {
            tracing::warn!(%contact, option = option_id, "Dialogue option no longer available");
            return Err(GameError::ConditionNotMet(option_id.to_string()));
        }

        let reply = option.reply.render(&self.state, &content);
        option.effect.check(&self.state)?;
        option.effect.apply(&mut self.state);

        self.post_message(contact, Sender::Player, option.text.as_str());
        self.post_message(contact, Sender::Contact, reply.as_str());
        for id in &option.unlocks {
            self.state.unlocked_dialogue_options.insert(id.clone());
        }

        tracing::debug!(
            %contact,
            option = option_id,
            day = self.state.day,
            "Dialogue option chosen"
        );
        Ok(reply)
    }
}
