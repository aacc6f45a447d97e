//! Closed set of actions accepted by the rules engine

use serde::{Deserialize, Serialize};

use crate::board::HexCoord;
use crate::catalog::CreatureKind;
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::{GameEvent, GameState, TurnPhase};
use crate::rules::error::RuleError;

/// Every operation a caller can submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    // Player actions (Main phase)
    Summon { cell: HexCoord, kind: CreatureKind, player: PlayerSide },
    Move { creature: CreatureId, from: HexCoord, to: HexCoord },
    Attack { attacker: CreatureId, target: CreatureId },

    // Phase control
    SetTurnPhase { phase: TurnPhase },
    AdvancePhase,
    EndTurn,

    // Setup and test utilities
    AddCreature { kind: CreatureKind, owner: PlayerSide, cell: HexCoord },
    RemoveCreature { creature: CreatureId },
    DamageTower { cell: HexCoord, amount: i32 },
    CaptureHex { cell: HexCoord, player: PlayerSide },
    SpendMana { player: PlayerSide, amount: u32 },
    ResetGame,
}

impl Action {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::Summon { .. } => "summon",
            Action::Move { .. } => "move",
            Action::Attack { .. } => "attack",
            Action::SetTurnPhase { .. } => "set_turn_phase",
            Action::AdvancePhase => "advance_phase",
            Action::EndTurn => "end_turn",
            Action::AddCreature { .. } => "add_creature",
            Action::RemoveCreature { .. } => "remove_creature",
            Action::DamageTower { .. } => "damage_tower",
            Action::CaptureHex { .. } => "capture_hex",
            Action::SpendMana { .. } => "spend_mana",
            Action::ResetGame => "reset_game",
        }
    }
}

/// Outcome of one action: the next state plus events or a rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub state: GameState,
    pub outcome: Result<Vec<GameEvent>, RuleError>,
}

impl Resolution {
    pub fn accepted(state: GameState, events: Vec<GameEvent>) -> Self {
        Self {
            state,
            outcome: Ok(events),
        }
    }

    pub fn rejected(state: GameState, error: RuleError) -> Self {
        Self {
            state,
            outcome: Err(error),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<RuleError> {
        self.outcome.as_ref().err().copied()
    }

    /// Events of an accepted action; empty when rejected
    pub fn events(&self) -> &[GameEvent] {
        match &self.outcome {
            Ok(events) => events,
            Err(_) => &[],
        }
    }
}
