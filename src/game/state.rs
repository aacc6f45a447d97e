//! Authoritative game snapshot
//!
//! A `GameState` is a plain value. Rules take a reference and produce a new
//! value; nothing here is shared or global.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, ControlledHexes, HexCoord};
use crate::catalog::CreatureKind;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{CreatureId, PlayerSide, TowerId, Turn};
use crate::game::creature::CreatureInstance;
use crate::game::player::{PlayerState, Players};
use crate::game::tower::TowerInstance;

/// Turn phases, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    Upkeep,
    #[default]
    Main,
    End,
}

impl TurnPhase {
    /// Successor within a turn; End has none (it closes the turn)
    pub fn next(&self) -> Option<TurnPhase> {
        match self {
            TurnPhase::Upkeep => Some(TurnPhase::Main),
            TurnPhase::Main => Some(TurnPhase::End),
            TurnPhase::End => None,
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::Upkeep => "upkeep",
            TurnPhase::Main => "main",
            TurnPhase::End => "end",
        };
        f.write_str(name)
    }
}

impl FromStr for TurnPhase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upkeep" => Ok(TurnPhase::Upkeep),
            "main" => Ok(TurnPhase::Main),
            "end" => Ok(TurnPhase::End),
            other => Err(format!("unknown phase '{}'", other)),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // Turn structure
    pub turn: Turn,
    pub current_player: PlayerSide,
    pub phase: TurnPhase,

    // Board and pieces
    pub board: Board,
    pub creatures: BTreeMap<CreatureId, CreatureInstance>,
    pub towers: Vec<TowerInstance>,

    pub players: Players,

    /// Tower messages from the most recent upkeep
    pub last_tower_report: Vec<String>,

    next_creature_id: u32,
    config: GameConfig,
}

impl GameState {
    /// Validate `config` and build the opening position
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Opening position for the default configuration
    pub fn initial() -> Self {
        Self::build(GameConfig::default())
    }

    /// Fresh opening position from this game's configuration
    pub fn reset(&self) -> Self {
        Self::build(self.config.clone())
    }

    fn build(config: GameConfig) -> Self {
        let mut board = Board::new(config.board_width, config.board_height);
        board.assign_columns(config.player_a_columns.first, config.player_a_columns.last, PlayerSide::A);
        board.assign_columns(config.player_b_columns.first, config.player_b_columns.last, PlayerSide::B);

        let mut towers = Vec::with_capacity(config.towers.len());
        for (i, placement) in config.towers.iter().enumerate() {
            board.place_tower(placement.cell, placement.kind, placement.owner);
            towers.push(TowerInstance::new(
                TowerId(i as u32 + 1),
                placement.kind,
                placement.owner,
                placement.cell,
            ));
        }

        let players = Players {
            a: PlayerState::new(config.starting_mana, config.starting_hand.clone()),
            b: PlayerState::new(config.starting_mana, config.starting_hand.clone()),
        };

        let mut state = Self {
            turn: 1,
            current_player: PlayerSide::A,
            phase: TurnPhase::Main,
            board,
            creatures: BTreeMap::new(),
            towers,
            players,
            last_tower_report: Vec::new(),
            next_creature_id: 1,
            config,
        };

        let seeds = state.config.seed_creatures.clone();
        for seed in seeds {
            state.place_creature(seed.kind, seed.owner, seed.cell);
        }

        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reserve the next creature id
    pub fn allocate_creature_id(&mut self) -> CreatureId {
        let id = CreatureId(self.next_creature_id);
        self.next_creature_id += 1;
        id
    }

    /// Create a creature on `cell` and link both sides of the occupancy relation
    ///
    /// Callers check that the cell is on the board and empty.
    pub fn place_creature(&mut self, kind: CreatureKind, owner: PlayerSide, cell: HexCoord) -> CreatureId {
        let id = self.allocate_creature_id();
        let creature = CreatureInstance::new(id, kind, owner, cell);
        if let Some(target) = self.board.get_mut(cell) {
            target.occupant = Some(id);
        }
        self.creatures.insert(id, creature);
        id
    }

    /// Delete a creature and clear its cell in the same step
    pub fn remove_creature(&mut self, id: CreatureId) -> Option<CreatureInstance> {
        let creature = self.creatures.remove(&id)?;
        if let Some(cell) = self.board.get_mut(creature.position) {
            if cell.occupant == Some(id) {
                cell.occupant = None;
            }
        }
        Some(creature)
    }

    pub fn creature(&self, id: CreatureId) -> Option<&CreatureInstance> {
        self.creatures.get(&id)
    }

    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut CreatureInstance> {
        self.creatures.get_mut(&id)
    }

    /// Creature standing on `cell`, if any
    pub fn creature_at(&self, cell: HexCoord) -> Option<&CreatureInstance> {
        self.board.occupant(cell).and_then(|id| self.creatures.get(&id))
    }

    pub fn tower_at(&self, cell: HexCoord) -> Option<&TowerInstance> {
        self.towers.iter().find(|tower| tower.position == cell)
    }

    pub fn tower_at_mut(&mut self, cell: HexCoord) -> Option<&mut TowerInstance> {
        self.towers.iter_mut().find(|tower| tower.position == cell)
    }

    /// Is `cell` inside any tower's domain?
    pub fn in_any_domain(&self, cell: HexCoord) -> bool {
        self.towers.iter().any(|tower| tower.in_domain(cell))
    }

    pub fn player(&self, side: PlayerSide) -> &PlayerState {
        self.players.get(side)
    }

    pub fn player_mut(&mut self, side: PlayerSide) -> &mut PlayerState {
        self.players.get_mut(side)
    }

    /// Creatures owned by `side`, in id order
    pub fn creatures_of(&self, side: PlayerSide) -> impl Iterator<Item = &CreatureInstance> {
        self.creatures.values().filter(move |c| c.owner == side)
    }

    /// Derived count of cells per owner
    pub fn controlled_hexes(&self) -> ControlledHexes {
        self.board.controlled_hexes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_turn_structure() {
        let state = GameState::initial();
        assert_eq!(state.turn, 1);
        assert_eq!(state.current_player, PlayerSide::A);
        assert_eq!(state.phase, TurnPhase::Main);
        assert_eq!(state.player(PlayerSide::A).mana, 10);
        assert_eq!(state.player(PlayerSide::B).hand.len(), 5);
    }

    #[test]
    fn test_initial_territory() {
        let state = GameState::initial();
        assert_eq!(state.board.owner(HexCoord::new(4, 7)), Some(PlayerSide::A));
        assert_eq!(state.board.owner(HexCoord::new(5, 0)), None);
        assert_eq!(state.board.owner(HexCoord::new(10, 7)), None);
        assert_eq!(state.board.owner(HexCoord::new(11, 0)), Some(PlayerSide::B));

        let counts = state.controlled_hexes();
        assert_eq!((counts.a, counts.b, counts.neutral), (40, 40, 48));
    }

    #[test]
    fn test_initial_towers() {
        let state = GameState::initial();
        assert_eq!(state.towers.len(), 4);
        let frost = state.tower_at(HexCoord::new(15, 0)).expect("frost tower");
        assert_eq!(frost.owner, PlayerSide::B);
        assert!(state.board.is_tower(HexCoord::new(0, 7)));
        assert!(!state.board.is_tower(HexCoord::new(1, 7)));
    }

    #[test]
    fn test_seed_creatures_linked() {
        let state = GameState::initial();
        let warrior = state.creature_at(HexCoord::new(2, 3)).expect("seed warrior");
        assert_eq!(warrior.kind, CreatureKind::Warrior);
        assert_eq!(warrior.owner, PlayerSide::A);
        let archer = state.creature_at(HexCoord::new(13, 4)).expect("seed archer");
        assert_eq!(archer.owner, PlayerSide::B);
        assert_eq!(state.creatures.len(), 2);
    }

    #[test]
    fn test_remove_creature_clears_cell() {
        let mut state = GameState::initial();
        let id = state.board.occupant(HexCoord::new(2, 3)).expect("occupied");
        assert!(state.remove_creature(id).is_some());
        assert!(state.board.occupant(HexCoord::new(2, 3)).is_none());
        assert!(state.remove_creature(id).is_none());
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut state = GameState::initial();
        let id = state.place_creature(CreatureKind::Scout, PlayerSide::A, HexCoord::new(1, 1));
        assert_eq!(id, CreatureId(3));
    }

    #[test]
    fn test_phase_successor() {
        assert_eq!(TurnPhase::Upkeep.next(), Some(TurnPhase::Main));
        assert_eq!(TurnPhase::Main.next(), Some(TurnPhase::End));
        assert_eq!(TurnPhase::End.next(), None);
    }

    #[test]
    fn test_state_json_round_trip() {
        let state = GameState::initial();
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
