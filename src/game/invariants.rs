//! Game invariants - sanity checks that detect rule bugs
//!
//! A correctly resolved state never violates these. Tests and the session
//! host run them after every action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::HexCoord;
use crate::core::types::{CreatureId, PlayerSide};
use crate::game::state::GameState;

/// Invariant violation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrityError {
    #[error("cell {cell} points at missing creature {creature}")]
    DanglingOccupant { cell: HexCoord, creature: CreatureId },

    #[error("creature {creature} at {position} is not registered on its cell")]
    UnlinkedCreature { creature: CreatureId, position: HexCoord },

    #[error("creature {creature} has health {health} outside 1..={max_health}")]
    HealthOutOfBounds { creature: CreatureId, health: i32, max_health: i32 },

    #[error("tower at {cell} has health {health} outside 0..={max_health}")]
    TowerHealthOutOfBounds { cell: HexCoord, health: i32, max_health: i32 },

    #[error("tower at {cell} is not flagged on the board")]
    UnflaggedTower { cell: HexCoord },

    #[error("tower cell {cell} is owned by {cell_owner:?}, tower belongs to {tower_owner}")]
    TowerOwnerMismatch {
        cell: HexCoord,
        cell_owner: Option<PlayerSide>,
        tower_owner: PlayerSide,
    },

    #[error("player {player} has {mana} mana, cap is {cap}")]
    ManaOutOfBounds { player: PlayerSide, mana: u32, cap: u32 },

    #[error("turn counter is zero")]
    TurnZero,
}

/// Check all game invariants
///
/// Returns every violation found, or empty if all invariants hold.
pub fn check_invariants(state: &GameState) -> Vec<IntegrityError> {
    let mut violations = Vec::new();

    if state.turn == 0 {
        violations.push(IntegrityError::TurnZero);
    }

    // Occupancy, cell side
    for cell in state.board.cells() {
        if let Some(id) = cell.occupant {
            match state.creature(id) {
                Some(creature) if creature.position == cell.coord => {}
                _ => violations.push(IntegrityError::DanglingOccupant {
                    cell: cell.coord,
                    creature: id,
                }),
            }
        }
    }

    // Occupancy, creature side; health bounds
    for creature in state.creatures.values() {
        if state.board.occupant(creature.position) != Some(creature.id) {
            violations.push(IntegrityError::UnlinkedCreature {
                creature: creature.id,
                position: creature.position,
            });
        }
        if creature.health < 1 || creature.health > creature.max_health {
            violations.push(IntegrityError::HealthOutOfBounds {
                creature: creature.id,
                health: creature.health,
                max_health: creature.max_health,
            });
        }
    }

    for tower in &state.towers {
        if tower.health < 0 || tower.health > tower.max_health {
            violations.push(IntegrityError::TowerHealthOutOfBounds {
                cell: tower.position,
                health: tower.health,
                max_health: tower.max_health,
            });
        }
        if !state.board.is_tower(tower.position) {
            violations.push(IntegrityError::UnflaggedTower { cell: tower.position });
        }
        let cell_owner = state.board.owner(tower.position);
        if cell_owner != Some(tower.owner) {
            violations.push(IntegrityError::TowerOwnerMismatch {
                cell: tower.position,
                cell_owner,
                tower_owner: tower.owner,
            });
        }
    }

    let cap = state.config().mana_cap;
    for player in PlayerSide::all() {
        let mana = state.player(player).mana;
        if mana > cap {
            violations.push(IntegrityError::ManaOutOfBounds { player, mana, cap });
        }
    }

    violations
}

impl GameState {
    /// First invariant violation, if any
    pub fn integrity_check(&self) -> Result<(), IntegrityError> {
        match check_invariants(self).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_clean() {
        assert!(check_invariants(&GameState::initial()).is_empty());
    }

    #[test]
    fn test_detects_dangling_occupant() {
        let mut state = GameState::initial();
        let id = state.board.occupant(HexCoord::new(2, 3)).expect("seed warrior");
        state.creatures.remove(&id);
        assert!(matches!(
            state.integrity_check(),
            Err(IntegrityError::DanglingOccupant { .. })
        ));
    }

    #[test]
    fn test_detects_corrupted_tower_cell() {
        let mut state = GameState::initial();
        if let Some(cell) = state.board.get_mut(HexCoord::new(15, 0)) {
            cell.owner = Some(PlayerSide::A);
        }
        assert!(check_invariants(&state)
            .iter()
            .any(|v| matches!(v, IntegrityError::TowerOwnerMismatch { .. })));
    }

    #[test]
    fn test_detects_mana_over_cap() {
        let mut state = GameState::initial();
        state.player_mut(PlayerSide::B).mana = 25;
        assert_eq!(
            state.integrity_check(),
            Err(IntegrityError::ManaOutOfBounds {
                player: PlayerSide::B,
                mana: 25,
                cap: 20
            })
        );
    }
}
