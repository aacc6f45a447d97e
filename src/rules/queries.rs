//! Read-only questions a presentation layer asks about a state

use serde::{Deserialize, Serialize};

use crate::board::{ControlledHexes, HexCoord};
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::{GameState, TurnPhase};

/// Empty cells within the creature's speed
///
/// Unknown creatures and creatures that already moved have no targets.
pub fn valid_move_targets(state: &GameState, creature: CreatureId) -> Vec<HexCoord> {
    let Some(creature) = state.creature(creature) else {
        return Vec::new();
    };
    if creature.has_moved {
        return Vec::new();
    }
    state
        .board
        .cells_within(creature.position, creature.speed)
        .into_iter()
        .filter(|&cell| cell != creature.position && state.board.occupant(cell).is_none())
        .collect()
}

/// Cells within range that hold an enemy creature
///
/// Guard blocking is not considered here; the attack itself reports it.
pub fn valid_attack_targets(state: &GameState, creature: CreatureId) -> Vec<HexCoord> {
    let Some(attacker) = state.creature(creature) else {
        return Vec::new();
    };
    if attacker.has_attacked {
        return Vec::new();
    }
    state
        .board
        .cells_within(attacker.position, attacker.range)
        .into_iter()
        .filter(|&cell| {
            state
                .creature_at(cell)
                .is_some_and(|target| target.owner != attacker.owner)
        })
        .collect()
}

/// Could `player` summon onto `cell` right now, ignoring mana and hand?
pub fn is_valid_summon_target(state: &GameState, cell: HexCoord, player: PlayerSide) -> bool {
    state
        .board
        .get(cell)
        .is_some_and(|c| c.owner == Some(player) && !c.is_occupied())
}

/// Main phase is the only phase that accepts player actions
pub fn can_perform_actions(state: &GameState) -> bool {
    state.phase == TurnPhase::Main
}

pub fn controlled_hex_counts(state: &GameState) -> ControlledHexes {
    state.controlled_hexes()
}

pub fn controlled_cells(state: &GameState, player: PlayerSide) -> Vec<HexCoord> {
    state.board.controlled_cells(player)
}

/// Creatures of either side inside the domain of the tower at `tower_cell`
pub fn creatures_in_domain(state: &GameState, tower_cell: HexCoord) -> Vec<CreatureId> {
    let Some(tower) = state.tower_at(tower_cell) else {
        return Vec::new();
    };
    state
        .creatures
        .values()
        .filter(|c| tower.in_domain(c.position))
        .map(|c| c.id)
        .collect()
}

/// Enemies of the tower's owner inside its domain
pub fn enemies_in_domain(state: &GameState, tower_cell: HexCoord) -> Vec<CreatureId> {
    let Some(tower) = state.tower_at(tower_cell) else {
        return Vec::new();
    };
    state
        .creatures
        .values()
        .filter(|c| c.owner != tower.owner && tower.in_domain(c.position))
        .map(|c| c.id)
        .collect()
}

/// How many of a player's creatures still have an action available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionsRemaining {
    pub can_move: usize,
    pub can_attack: usize,
}

pub fn actions_remaining(state: &GameState, player: PlayerSide) -> ActionsRemaining {
    state
        .creatures_of(player)
        .fold(ActionsRemaining::default(), |mut acc, c| {
            if !c.has_moved {
                acc.can_move += 1;
            }
            if !c.has_attacked {
                acc.can_attack += 1;
            }
            acc
        })
}
