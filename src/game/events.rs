//! Event log produced by resolved actions
//!
//! Every accepted action reports what happened as an ordered list of events,
//! each carrying a human-readable description for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::HexCoord;
use crate::catalog::{CreatureKind, StatusEffect, TowerKind};
use crate::core::types::{CreatureId, PlayerSide, Turn};
use crate::game::state::TurnPhase;

/// Log entry for game events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub turn: Turn,
    pub event_type: GameEventType,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    CreatureSummoned { creature: CreatureId, kind: CreatureKind, cell: HexCoord },
    CreatureAdded { creature: CreatureId, kind: CreatureKind, cell: HexCoord },
    CreatureMoved { creature: CreatureId, from: HexCoord, to: HexCoord },
    CreatureAttacked { attacker: CreatureId, target: CreatureId, damage: i32 },
    CreatureSlain { creature: CreatureId, kind: CreatureKind },
    CreatureRemoved { creature: CreatureId },
    TowerStruck { tower: TowerKind, creature: CreatureId, damage: i32 },
    StatusApplied { creature: CreatureId, effect: StatusEffect },
    HexesCaptured { player: PlayerSide, cells: Vec<HexCoord> },
    TerritoryTallied { a: usize, b: usize },
    ManaGranted { player: PlayerSide, amount: u32, total: u32 },
    ManaSpent { player: PlayerSide, amount: u32 },
    PhaseChanged { phase: TurnPhase },
    TurnEnded { next_player: PlayerSide, turn: Turn },
    TowerDamaged { tower: TowerKind, health: i32 },
    TowerFallen { tower: TowerKind },
    GameReset,
}

/// Ordered events from a single resolution
#[derive(Debug, Clone, Default)]
pub struct GameEventLog {
    pub events: Vec<GameEvent>,
}

impl GameEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn, event_type: GameEventType, description: String) {
        self.events.push(GameEvent {
            turn,
            event_type,
            description,
        });
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}
