//! Selection and highlight state for a presentation layer
//!
//! Kept apart from `GameState`: nothing here affects the rules.

use serde::{Deserialize, Serialize};

use crate::board::HexCoord;
use crate::core::types::CreatureId;
use crate::game::GameState;
use crate::rules::{valid_attack_targets, valid_move_targets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionMode {
    #[default]
    Idle,
    Move,
    Attack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub selected_cell: Option<HexCoord>,
    pub selected_creature: Option<CreatureId>,
    pub mode: ActionMode,
    pub highlighted: Vec<HexCoord>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Select a cell and whatever creature stands on it
    pub fn select_cell(&mut self, state: &GameState, cell: HexCoord) {
        self.selected_cell = Some(cell);
        self.selected_creature = state.board.occupant(cell);
        self.mode = ActionMode::Idle;
        self.highlighted.clear();
    }

    /// Select a creature and highlight its targets for `mode`
    ///
    /// Returns the highlighted cells. Unknown creatures clear the selection.
    pub fn highlight(&mut self, state: &GameState, mode: ActionMode, creature: CreatureId) -> &[HexCoord] {
        let Some(found) = state.creature(creature) else {
            self.clear();
            return &self.highlighted;
        };
        self.selected_cell = Some(found.position);
        self.selected_creature = Some(creature);
        self.mode = mode;
        self.highlighted = match mode {
            ActionMode::Idle => Vec::new(),
            ActionMode::Move => valid_move_targets(state, creature),
            ActionMode::Attack => valid_attack_targets(state, creature),
        };
        &self.highlighted
    }

    pub fn is_highlighted(&self, cell: HexCoord) -> bool {
        self.highlighted.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cell_picks_occupant() {
        let state = GameState::initial();
        let mut ui = InteractionState::new();
        ui.select_cell(&state, HexCoord::new(2, 3));
        assert_eq!(ui.selected_creature, Some(CreatureId(1)));
        ui.select_cell(&state, HexCoord::new(5, 5));
        assert_eq!(ui.selected_creature, None);
        assert_eq!(ui.selected_cell, Some(HexCoord::new(5, 5)));
    }

    #[test]
    fn test_highlight_move_targets() {
        let state = GameState::initial();
        let mut ui = InteractionState::new();
        let count = ui.highlight(&state, ActionMode::Move, CreatureId(1)).len();
        assert_eq!(count, 18);
        assert!(ui.is_highlighted(HexCoord::new(2, 2)));
        assert_eq!(ui.mode, ActionMode::Move);
    }

    #[test]
    fn test_highlight_unknown_clears() {
        let state = GameState::initial();
        let mut ui = InteractionState::new();
        ui.select_cell(&state, HexCoord::new(2, 3));
        assert!(ui.highlight(&state, ActionMode::Attack, CreatureId(99)).is_empty());
        assert_eq!(ui, InteractionState::default());
    }
}
