//! Game state - creatures, towers, players, and the authoritative snapshot

pub mod creature;
pub mod events;
pub mod invariants;
pub mod player;
pub mod state;
pub mod tower;

pub use creature::{apply_domain_effect, CreatureInstance};
pub use events::{GameEvent, GameEventLog, GameEventType};
pub use invariants::{check_invariants, IntegrityError};
pub use player::{PlayerState, Players};
pub use state::{GameState, TurnPhase};
pub use tower::TowerInstance;
