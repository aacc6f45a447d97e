//! Tower types, their stats, and the status effects they project

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerKind {
    Inferno,
    Frost,
    Venom,
    Shadow,
}

/// Status tag applied by a tower's domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffect {
    Burn,
    Slow,
    Poison,
    Weaken,
}

impl StatusEffect {
    /// Transient effects are lifted at the next upkeep
    pub fn is_transient(&self) -> bool {
        matches!(self, StatusEffect::Slow | StatusEffect::Weaken)
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusEffect::Burn => "burn",
            StatusEffect::Slow => "slow",
            StatusEffect::Poison => "poison",
            StatusEffect::Weaken => "weaken",
        };
        f.write_str(name)
    }
}

/// Static stats for a tower type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TowerTemplate {
    pub kind: TowerKind,
    pub name: &'static str,
    pub health: i32,
    pub damage: i32,
    pub domain_range: u32,
    pub domain_effect: StatusEffect,
}

impl TowerKind {
    pub fn all() -> [TowerKind; 4] {
        [
            TowerKind::Inferno,
            TowerKind::Frost,
            TowerKind::Venom,
            TowerKind::Shadow,
        ]
    }

    pub fn token(&self) -> &'static str {
        match self {
            TowerKind::Inferno => "inferno",
            TowerKind::Frost => "frost",
            TowerKind::Venom => "venom",
            TowerKind::Shadow => "shadow",
        }
    }

    pub fn template(&self) -> TowerTemplate {
        match self {
            TowerKind::Inferno => TowerTemplate {
                kind: *self,
                name: "Inferno Tower",
                health: 25,
                damage: 2,
                domain_range: 2,
                domain_effect: StatusEffect::Burn,
            },
            TowerKind::Frost => TowerTemplate {
                kind: *self,
                name: "Frost Tower",
                health: 30,
                damage: 1,
                domain_range: 2,
                domain_effect: StatusEffect::Slow,
            },
            TowerKind::Venom => TowerTemplate {
                kind: *self,
                name: "Venom Tower",
                health: 25,
                damage: 1,
                domain_range: 2,
                domain_effect: StatusEffect::Poison,
            },
            TowerKind::Shadow => TowerTemplate {
                kind: *self,
                name: "Shadow Tower",
                health: 30,
                damage: 2,
                domain_range: 2,
                domain_effect: StatusEffect::Weaken,
            },
        }
    }
}

impl fmt::Display for TowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
