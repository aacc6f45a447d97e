//! Live creature instances

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::HexCoord;
use crate::catalog::{Archetype, CreatureKind, StatusEffect};
use crate::core::types::{CreatureId, PlayerSide};

/// One creature on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureInstance {
    pub id: CreatureId,
    pub kind: CreatureKind,
    pub owner: PlayerSide,
    pub position: HexCoord,

    // Current stats
    pub attack: i32,
    pub health: i32,
    pub max_health: i32,
    pub speed: u32,
    pub range: u32,

    // Values restored at upkeep
    pub base_attack: i32,
    pub base_speed: u32,

    pub can_capture: bool,
    pub archetype: Archetype,

    // Per-turn flags
    pub has_moved: bool,
    pub has_attacked: bool,
    pub marked_for_capture: bool,

    pub status_effects: BTreeSet<StatusEffect>,
}

impl CreatureInstance {
    /// Instantiate from the catalog with fresh flags
    pub fn new(id: CreatureId, kind: CreatureKind, owner: PlayerSide, position: HexCoord) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            owner,
            position,
            attack: template.attack,
            health: template.health,
            max_health: template.health,
            speed: template.speed,
            range: template.range,
            base_attack: template.attack,
            base_speed: template.speed,
            can_capture: template.can_capture,
            archetype: template.archetype,
            has_moved: false,
            has_attacked: false,
            marked_for_capture: false,
            status_effects: BTreeSet::new(),
        }
    }

    pub fn is_tank(&self) -> bool {
        self.archetype == Archetype::Tank
    }

    pub fn is_melee(&self) -> bool {
        self.range == 1
    }

    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.status_effects.contains(&effect)
    }

    /// Upkeep reset: clear action flags, restore base stats, lift transient tags
    pub fn refresh(&mut self) {
        self.has_moved = false;
        self.has_attacked = false;
        self.attack = self.base_attack;
        self.speed = self.base_speed;
        self.status_effects.retain(|effect| !effect.is_transient());
    }
}

/// Apply a tower's domain effect, returning the affected creature
///
/// Burn and poison only add a tag. Slow and weaken lower speed or attack by
/// one, never below 1.
pub fn apply_domain_effect(creature: &CreatureInstance, effect: StatusEffect) -> CreatureInstance {
    let mut affected = creature.clone();
    match effect {
        StatusEffect::Burn | StatusEffect::Poison => {}
        StatusEffect::Slow => affected.speed = affected.speed.saturating_sub(1).max(1),
        StatusEffect::Weaken => affected.attack = (affected.attack - 1).max(1),
    }
    affected.status_effects.insert(effect);
    affected
}
