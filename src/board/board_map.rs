//! Board with hex grid, territory ownership, and occupancy
//!
//! The grid is a fixed rectangle of cells stored row by row. Controlled-hex
//! counts are always derived from cell owners, never stored.

use serde::{Deserialize, Serialize};

use crate::board::hex::HexCoord;
use crate::catalog::TowerKind;
use crate::core::types::{CreatureId, PlayerSide};

/// A single cell on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: HexCoord,
    pub owner: Option<PlayerSide>,
    pub occupant: Option<CreatureId>,
    pub tower: Option<TowerKind>,
}

impl Cell {
    pub fn new(coord: HexCoord) -> Self {
        Self {
            coord,
            owner: None,
            occupant: None,
            tower: None,
        }
    }

    pub fn is_tower(&self) -> bool {
        self.tower.is_some()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Derived count of cells held by each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlledHexes {
    pub a: usize,
    pub b: usize,
    pub neutral: usize,
}

impl ControlledHexes {
    pub fn get(&self, player: PlayerSide) -> usize {
        match player {
            PlayerSide::A => self.a,
            PlayerSide::B => self.b,
        }
    }
}

/// The full board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an unowned, empty board
    pub fn new(width: i32, height: i32) -> Self {
        let mut cells = Vec::with_capacity(width.max(0) as usize * height.max(0) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(HexCoord::new(x, y)));
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    fn index(&self, coord: HexCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Check if coordinate is within board bounds
    pub fn in_bounds(&self, coord: HexCoord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    pub fn get(&self, coord: HexCoord) -> Option<&Cell> {
        let i = self.index(coord)?;
        self.cells.get(i)
    }

    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut Cell> {
        let i = self.index(coord)?;
        self.cells.get_mut(i)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// On-board neighbors of a cell
    pub fn neighbors(&self, coord: HexCoord) -> Vec<HexCoord> {
        coord.neighbors(self.width, self.height)
    }

    /// All on-board cells within `range` steps of `center` (center included)
    pub fn cells_within(&self, center: HexCoord, range: u32) -> Vec<HexCoord> {
        self.cells
            .iter()
            .map(|cell| cell.coord)
            .filter(|coord| center.distance(coord) <= range)
            .collect()
    }

    pub fn owner(&self, coord: HexCoord) -> Option<PlayerSide> {
        self.get(coord).and_then(|cell| cell.owner)
    }

    pub fn occupant(&self, coord: HexCoord) -> Option<CreatureId> {
        self.get(coord).and_then(|cell| cell.occupant)
    }

    pub fn is_tower(&self, coord: HexCoord) -> bool {
        self.get(coord).map(|cell| cell.is_tower()).unwrap_or(false)
    }

    /// Give `coord` to `owner` unless it is a tower cell
    ///
    /// Returns whether the owner field was written.
    pub fn claim(&mut self, coord: HexCoord, owner: PlayerSide) -> bool {
        match self.get_mut(coord) {
            Some(cell) if !cell.is_tower() => {
                cell.owner = Some(owner);
                true
            }
            _ => false,
        }
    }

    /// Assign a column band to a player
    pub fn assign_columns(&mut self, first: i32, last: i32, owner: PlayerSide) {
        for cell in self.cells.iter_mut() {
            if cell.coord.x >= first && cell.coord.x <= last {
                cell.owner = Some(owner);
            }
        }
    }

    /// Mark a tower cell; tower cells belong to the tower's owner
    pub fn place_tower(&mut self, coord: HexCoord, kind: TowerKind, owner: PlayerSide) {
        if let Some(cell) = self.get_mut(coord) {
            cell.tower = Some(kind);
            cell.owner = Some(owner);
        }
    }

    /// Count cells by owner
    pub fn controlled_hexes(&self) -> ControlledHexes {
        self.cells
            .iter()
            .fold(ControlledHexes::default(), |mut acc, cell| {
                match cell.owner {
                    Some(PlayerSide::A) => acc.a += 1,
                    Some(PlayerSide::B) => acc.b += 1,
                    None => acc.neutral += 1,
                }
                acc
            })
    }

    /// Cells held by a player, row by row
    pub fn controlled_cells(&self, player: PlayerSide) -> Vec<HexCoord> {
        self.cells
            .iter()
            .filter(|cell| cell.owner == Some(player))
            .map(|cell| cell.coord)
            .collect()
    }
}
