//! Creature types and their template stats
//!
//! Templates are immutable; every live creature starts as a copy of one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of summonable creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    Warrior, // Tank, guards adjacent allies
    Archer,  // Ranged
    Mage,    // Support, cannot capture
    Scout,   // Fast and cheap
}

/// Rule-bearing category of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Blocks melee attacks against adjacent allies
    Tank,
    Ranged,
    /// Never captures territory
    Support,
    Fast,
}

/// Static stats for a creature type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureTemplate {
    pub kind: CreatureKind,
    pub name: &'static str,
    pub mana_cost: u32,
    pub attack: i32,
    pub health: i32,
    pub speed: u32,
    pub range: u32,
    pub can_capture: bool,
    pub archetype: Archetype,
    pub description: &'static str,
}

impl CreatureKind {
    /// Every catalog entry
    pub fn all() -> [CreatureKind; 4] {
        [
            CreatureKind::Warrior,
            CreatureKind::Archer,
            CreatureKind::Mage,
            CreatureKind::Scout,
        ]
    }

    /// Hand token used in commands and config files
    pub fn token(&self) -> &'static str {
        match self {
            CreatureKind::Warrior => "warrior",
            CreatureKind::Archer => "archer",
            CreatureKind::Mage => "mage",
            CreatureKind::Scout => "scout",
        }
    }

    /// Get the template for this creature type
    pub fn template(&self) -> CreatureTemplate {
        match self {
            CreatureKind::Warrior => CreatureTemplate {
                kind: *self,
                name: "Warrior",
                mana_cost: 3,
                attack: 3,
                health: 4,
                speed: 2,
                range: 1,
                can_capture: true,
                archetype: Archetype::Tank,
                description: "A sturdy melee fighter with Tank guarding",
            },

            CreatureKind::Archer => CreatureTemplate {
                kind: *self,
                name: "Archer",
                mana_cost: 2,
                attack: 2,
                health: 2,
                speed: 2,
                range: 3,
                can_capture: true,
                archetype: Archetype::Ranged,
                description: "Ranged unit with quick strikes",
            },

            CreatureKind::Mage => CreatureTemplate {
                kind: *self,
                name: "Mage",
                mana_cost: 4,
                attack: 1,
                health: 3,
                speed: 1,
                range: 2,
                can_capture: false,
                archetype: Archetype::Support,
                description: "Magical support unit (cannot capture)",
            },

            CreatureKind::Scout => CreatureTemplate {
                kind: *self,
                name: "Scout",
                mana_cost: 1,
                attack: 1,
                health: 1,
                speed: 3,
                range: 1,
                can_capture: true,
                archetype: Archetype::Fast,
                description: "Fast, cheap unit for exploration",
            },
        }
    }
}

impl fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CreatureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        CreatureKind::all()
            .into_iter()
            .find(|kind| kind.token() == token)
            .ok_or_else(|| format!("unknown creature type '{}'", s.trim()))
    }
}
