//! Long-lived game session for interactive hosts
//!
//! `GameSession` owns the one current `GameState`, the selection state of the
//! presentation layer, and the running event log. It talks to the rules only
//! through `apply_action` and the query functions.

pub mod command;
pub mod interaction;
pub mod report;

pub use command::{parse_command, Command, HELP};
pub use interaction::{ActionMode, InteractionState};

use crate::core::config::GameConfig;
use crate::core::error::{HexfrontError, Result};
use crate::game::{GameEvent, GameState};
use crate::rules::{apply_action, Action};

/// What a command produced, for the host to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// An accepted action and the events it emitted
    Applied(Vec<GameEvent>),
    /// Text to show (state summaries, help, target lists)
    Info(String),
    Quit,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    interaction: InteractionState,
    log: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            interaction: InteractionState::new(),
            log: Vec::new(),
        }
    }

    /// Start a session from a validated configuration
    pub fn from_config(config: GameConfig) -> Result<Self> {
        Ok(Self::new(GameState::new(config)?))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Every event accepted so far, oldest first
    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    /// Resolve an action and adopt the resulting state
    ///
    /// A rejection leaves the session untouched, and so does a resulting
    /// state that fails its integrity check. Acceptance clears the selection
    /// since highlighted targets may no longer be valid.
    pub fn apply(&mut self, action: &Action) -> Result<Vec<GameEvent>> {
        let resolution = apply_action(&self.state, action);
        let events = resolution.outcome?;
        if let Err(violation) = resolution.state.integrity_check() {
            tracing::warn!("Integrity violation after {}: {}", action.name(), violation);
            return Err(HexfrontError::Integrity(violation));
        }
        self.state = resolution.state;
        self.interaction.clear();
        if matches!(action, Action::ResetGame) {
            self.log.clear();
        }
        self.log.extend(events.iter().cloned());
        Ok(events)
    }

    /// Parse and run one line of input
    pub fn execute(&mut self, line: &str) -> Result<CommandOutcome> {
        let outcome = match parse_command(line)? {
            Command::Summon { kind, cell, player } => {
                let player = player.unwrap_or(self.state.current_player);
                CommandOutcome::Applied(self.apply(&Action::Summon { cell, kind, player })?)
            }
            Command::Act(action) => CommandOutcome::Applied(self.apply(&action)?),
            Command::Targets { mode, creature } => {
                let cells = self.interaction.highlight(&self.state, mode, creature);
                CommandOutcome::Info(report::target_list(cells))
            }
            Command::Select(cell) => {
                self.interaction.select_cell(&self.state, cell);
                CommandOutcome::Info(report::selection(&self.state, &self.interaction))
            }
            Command::Clear => {
                self.interaction.clear();
                CommandOutcome::Info("Selection cleared".into())
            }
            Command::State => CommandOutcome::Info(report::state_summary(&self.state)),
            Command::Hexes => CommandOutcome::Info(report::territory(&self.state)),
            Command::Towers => CommandOutcome::Info(report::towers(&self.state)),
            Command::Log => CommandOutcome::Info(report::event_log(&self.log)),
            Command::Help => CommandOutcome::Info(HELP.to_string()),
            Command::Quit => CommandOutcome::Quit,
        };
        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameState::initial())
    }
}
