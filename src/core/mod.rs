pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, SeedCreature, TowerPlacement};
pub use error::{HexfrontError, Result};
pub use types::{CreatureId, PlayerSide, TowerId, Turn};
