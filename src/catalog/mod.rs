//! Static template registries for creatures and towers

pub mod creatures;
pub mod towers;

pub use creatures::{Archetype, CreatureKind, CreatureTemplate};
pub use towers::{StatusEffect, TowerKind, TowerTemplate};
