//! State store - the single writer of the game state
//!
//! `GameStore` owns the `GameState` snapshot together with everything an
//! operation needs to run deterministically: the content tables, the engine
//! config, a seeded RNG, the id allocator and the deferred-task scheduler.
//! Every mutation goes through one of its named operations; the economy,
//! simulation and narrative modules add their operations as `impl` blocks.

pub mod messaging;
pub mod schedule;

pub use schedule::{Deferred, DeferredAction, Scheduler};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::content::{Content, Level, TutorialStep};
use crate::core::config::EngineConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{ContactId, IdAllocator, ModalKind, Screen, SessionId, TaskId};
use crate::state::GameState;

pub struct GameStore {
    pub(crate) state: GameState,
    pub(crate) config: EngineConfig,
    pub(crate) content: Arc<Content>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) ids: IdAllocator,
    pub(crate) scheduler: Scheduler,
    session: SessionId,
}

impl GameStore {
    /// Build a store from explicit config and content, validating both
    pub fn new(config: EngineConfig, content: Content, seed: u64) -> Result<Self> {
        config.validate()?;
        content.validate()?;
        Ok(Self::build(config, content, seed))
    }

    /// Store with the shipped content and default config
    pub fn standard(seed: u64) -> Self {
        Self::build(EngineConfig::default(), Content::standard(), seed)
    }

    fn build(config: EngineConfig, content: Content, seed: u64) -> Self {
        let state = GameState::initial(&config);
        let session = SessionId::new();
        tracing::info!(session = %session, seed, "New game");

        Self {
            state,
            config,
            content: Arc::new(content),
            rng: ChaCha8Rng::seed_from_u64(seed),
            ids: IdAllocator::new(),
            scheduler: Scheduler::new(),
            session,
        }
    }

    /// Read-only view of the full snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Current level definition
    pub fn level(&self) -> &Level {
        self.content.level(self.state.level_idx)
    }

    pub fn is_final_level(&self) -> bool {
        self.state.level_idx >= self.content.final_level_idx()
    }

    /// Serialize the snapshot for a presentation layer
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    /// Reject mutations once the run has ended
    pub(crate) fn ensure_running(&self) -> Result<()> {
        if self.state.is_game_over {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Reject an operation while its delayed reply to `contact` is queued
    pub(crate) fn ensure_no_reply_pending(&self, contact: ContactId) -> Result<()> {
        if self.scheduler.has_message_for(contact) {
            return Err(GameError::ReplyPending(contact));
        }
        Ok(())
    }

    /// Throw away the run and start over from the initial snapshot
    pub fn restart_game(&mut self) {
        let cancelled = self.scheduler.pending();
        self.scheduler.clear();
        self.state = GameState::initial(&self.config);
        self.session = SessionId::new();
        tracing::info!(session = %self.session, cancelled, "Game restarted");
    }

    // === NAVIGATION ===

    pub fn set_active_screen(&mut self, screen: Screen) {
        self.state.active_screen = screen;
        if screen != Screen::Chat {
            self.state.current_chat = None;
        }
    }

    /// Open or close a blocking modal. Opening pauses the clock.
    pub fn set_modal(&mut self, modal: ModalKind) -> Result<()> {
        if modal != ModalKind::None {
            self.ensure_running()?;
        }
        if modal != ModalKind::Sell {
            self.state.sell = None;
        }
        self.state.modal = modal;
        self.state.refresh_pause();
        Ok(())
    }

    /// Open the chat screen for an unlocked contact
    pub fn open_chat(&mut self, contact: ContactId) -> Result<()> {
        self.ensure_running()?;
        if !self.state.is_unlocked(contact) {
            return Err(GameError::ContactLocked(contact));
        }

        self.state.active_screen = Screen::Chat;
        self.state.current_chat = Some(contact);
        self.state.unread_counts.insert(contact, 0);

        if self.state.history(contact).is_empty() {
            let greeting = crate::content::profile(contact).greeting;
            self.post_message(contact, crate::core::types::Sender::Contact, greeting);
        }
        Ok(())
    }

    pub fn dismiss_notification(&mut self) {
        self.state.notification = None;
    }

    // === TUTORIAL ===

    /// Step currently shown, if the tutorial is running
    pub fn tutorial_step(&self) -> Option<&TutorialStep> {
        if !self.state.tutorial_active {
            return None;
        }
        self.content.tutorial.get(self.state.tutorial_step)
    }

    pub fn advance_tutorial(&mut self) {
        if !self.state.tutorial_active {
            return;
        }
        self.state.tutorial_step += 1;
        if self.state.tutorial_step >= self.content.tutorial.len() {
            self.finish_tutorial();
        }
    }

    pub fn skip_tutorial(&mut self) {
        if self.state.tutorial_active {
            self.state.tutorial_step = self.content.tutorial.len();
            self.finish_tutorial();
        }
    }

    fn finish_tutorial(&mut self) {
        self.state.tutorial_active = false;
        self.state.refresh_pause();
        tracing::debug!("Tutorial finished, clock running");
    }

    // === DEFERRED TASKS ===

    /// Advance real time and run every continuation that became due.
    /// Returns how many ran.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let due = self.scheduler.advance(elapsed.as_millis() as u64);
        let fired = due.len();
        for task in due {
            self.run_deferred(task.action);
        }
        fired
    }

    pub fn cancel_followup(&mut self, task: TaskId) -> bool {
        self.scheduler.cancel(task)
    }

    pub fn cancel_followups_for(&mut self, contact: ContactId) -> usize {
        self.scheduler.cancel_for_contact(contact)
    }

    pub fn pending_followups(&self) -> usize {
        self.scheduler.pending()
    }
}
