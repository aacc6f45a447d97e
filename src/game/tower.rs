//! Tower instances

use serde::{Deserialize, Serialize};

use crate::board::HexCoord;
use crate::catalog::{StatusEffect, TowerKind};
use crate::core::types::{PlayerSide, TowerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerInstance {
    pub id: TowerId,
    pub kind: TowerKind,
    pub owner: PlayerSide,
    pub position: HexCoord,
    pub health: i32,
    pub max_health: i32,
    pub damage: i32,
    pub domain_range: u32,
    pub domain_effect: StatusEffect,
}

impl TowerInstance {
    pub fn new(id: TowerId, kind: TowerKind, owner: PlayerSide, position: HexCoord) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            owner,
            position,
            health: template.health,
            max_health: template.health,
            damage: template.damage,
            domain_range: template.domain_range,
            domain_effect: template.domain_effect,
        }
    }

    /// A fallen tower keeps its cell and domain but no longer strikes
    pub fn is_fallen(&self) -> bool {
        self.health <= 0
    }

    /// Is `coord` inside this tower's domain?
    pub fn in_domain(&self, coord: HexCoord) -> bool {
        self.position.distance(&coord) <= self.domain_range
    }

    /// Reduce health, clamped at 0
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }
}
