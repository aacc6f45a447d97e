//! Game configuration with documented defaults
//!
//! Defaults reproduce the standard 16x8 skirmish. A TOML file may override
//! any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::board::HexCoord;
use crate::catalog::{CreatureKind, TowerKind};
use crate::core::error::{HexfrontError, Result};
use crate::core::types::PlayerSide;

/// Largest board, in cells, a configuration may ask for
pub const MAX_BOARD_CELLS: i32 = 65_536;

/// Inclusive range of columns owned by a player at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBand {
    pub first: i32,
    pub last: i32,
}

impl ColumnBand {
    pub fn contains(&self, column: i32) -> bool {
        column >= self.first && column <= self.last
    }
}

/// A tower fixed on the board at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerPlacement {
    pub kind: TowerKind,
    pub owner: PlayerSide,
    pub cell: HexCoord,
}

/// A creature present on the board at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCreature {
    pub kind: CreatureKind,
    pub owner: PlayerSide,
    pub cell: HexCoord,
}

/// Configuration for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === BOARD ===
    /// Number of columns
    pub board_width: i32,

    /// Number of rows
    pub board_height: i32,

    /// Columns owned by player A at start
    pub player_a_columns: ColumnBand,

    /// Columns owned by player B at start
    ///
    /// Columns between the two bands start neutral.
    pub player_b_columns: ColumnBand,

    /// Towers and their fixed cells
    pub towers: Vec<TowerPlacement>,

    // === MANA ECONOMY ===
    /// Mana each player holds on turn 1
    pub starting_mana: u32,

    /// Mana granted to the incoming player at every upkeep
    pub mana_per_upkeep: u32,

    /// Hard ceiling on a player's mana
    pub mana_cap: u32,

    // === UNITS ===
    /// Hand dealt to each player
    pub starting_hand: Vec<CreatureKind>,

    /// Creatures already on the board on turn 1
    pub seed_creatures: Vec<SeedCreature>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 16,
            board_height: 8,
            player_a_columns: ColumnBand { first: 0, last: 4 },
            player_b_columns: ColumnBand { first: 11, last: 15 },
            towers: vec![
                TowerPlacement {
                    kind: TowerKind::Inferno,
                    owner: PlayerSide::A,
                    cell: HexCoord::new(0, 0),
                },
                TowerPlacement {
                    kind: TowerKind::Frost,
                    owner: PlayerSide::B,
                    cell: HexCoord::new(15, 0),
                },
                TowerPlacement {
                    kind: TowerKind::Venom,
                    owner: PlayerSide::A,
                    cell: HexCoord::new(0, 7),
                },
                TowerPlacement {
                    kind: TowerKind::Shadow,
                    owner: PlayerSide::B,
                    cell: HexCoord::new(15, 7),
                },
            ],

            // Economy
            starting_mana: 10,
            mana_per_upkeep: 2,
            mana_cap: 20,

            starting_hand: vec![
                CreatureKind::Warrior,
                CreatureKind::Archer,
                CreatureKind::Mage,
                CreatureKind::Scout,
                CreatureKind::Warrior,
            ],
            seed_creatures: vec![
                SeedCreature {
                    kind: CreatureKind::Warrior,
                    owner: PlayerSide::A,
                    cell: HexCoord::new(2, 3),
                },
                SeedCreature {
                    kind: CreatureKind::Archer,
                    owner: PlayerSide::B,
                    cell: HexCoord::new(13, 4),
                },
            ],
        }
    }
}

impl GameConfig {
    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Band of starting columns for a player
    pub fn columns_for(&self, player: PlayerSide) -> ColumnBand {
        match player {
            PlayerSide::A => self.player_a_columns,
            PlayerSide::B => self.player_b_columns,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(HexfrontError::InvalidConfig(msg));

        if self.board_width <= 0 || self.board_height <= 0 {
            return invalid(format!(
                "board must be non-empty, got {}x{}",
                self.board_width, self.board_height
            ));
        }
        match self.board_width.checked_mul(self.board_height) {
            Some(cells) if cells <= MAX_BOARD_CELLS => {}
            _ => {
                return invalid(format!(
                    "board {}x{} exceeds {} cells",
                    self.board_width, self.board_height, MAX_BOARD_CELLS
                ))
            }
        }

        for player in PlayerSide::all() {
            let band = self.columns_for(player);
            if band.first > band.last || band.first < 0 || band.last >= self.board_width {
                return invalid(format!(
                    "player {} columns {}..={} do not fit a board {} wide",
                    player, band.first, band.last, self.board_width
                ));
            }
        }

        if self.player_a_columns.last >= self.player_b_columns.first
            && self.player_b_columns.last >= self.player_a_columns.first
        {
            return invalid("player territories overlap".into());
        }

        if self.mana_cap < self.starting_mana {
            return invalid(format!(
                "mana_cap ({}) should be >= starting_mana ({})",
                self.mana_cap, self.starting_mana
            ));
        }

        for (i, tower) in self.towers.iter().enumerate() {
            if !tower.cell.in_bounds(self.board_width, self.board_height) {
                return invalid(format!("tower {} at {} is off the board", tower.kind, tower.cell));
            }
            if self.towers[..i].iter().any(|other| other.cell == tower.cell) {
                return invalid(format!("two towers share cell {}", tower.cell));
            }
        }

        for (i, seed) in self.seed_creatures.iter().enumerate() {
            if !self.columns_for(seed.owner).contains(seed.cell.x)
                || !seed.cell.in_bounds(self.board_width, self.board_height)
            {
                return invalid(format!(
                    "seed {} at {} is outside player {} territory",
                    seed.kind, seed.cell, seed.owner
                ));
            }
            if self.towers.iter().any(|tower| tower.cell == seed.cell)
                || self.seed_creatures[..i].iter().any(|other| other.cell == seed.cell)
            {
                return invalid(format!("seed {} at {} shares an occupied cell", seed.kind, seed.cell));
            }
        }

        Ok(())
    }
}
