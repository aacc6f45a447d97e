//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSide {
    A,
    B,
}

impl PlayerSide {
    /// The other seat
    pub fn opponent(&self) -> Self {
        match self {
            PlayerSide::A => PlayerSide::B,
            PlayerSide::B => PlayerSide::A,
        }
    }

    /// Both seats in turn order
    pub fn all() -> [PlayerSide; 2] {
        [PlayerSide::A, PlayerSide::B]
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSide::A => write!(f, "A"),
            PlayerSide::B => write!(f, "B"),
        }
    }
}

impl FromStr for PlayerSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(PlayerSide::A),
            "B" | "b" => Ok(PlayerSide::B),
            other => Err(format!("unknown player '{}'", other)),
        }
    }
}

/// Unique identifier for creatures
///
/// Issued from a counter held by the game state, so two replays of the same
/// action sequence produce the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for towers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(pub u32);

/// Turn counter (starts at 1)
pub type Turn = u32;
