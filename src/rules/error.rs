//! Rule rejection codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was rejected
///
/// A rejected action leaves the state exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleError {
    #[error("not your turn")]
    NotYourTurn,

    #[error("action not allowed in this phase")]
    WrongPhase,

    #[error("not enough mana")]
    InsufficientMana,

    #[error("cell is occupied")]
    CellOccupied,

    #[error("cell is not owned by the acting player")]
    CellNotOwned,

    #[error("target is out of range")]
    OutOfRange,

    #[error("creature has already moved this turn")]
    AlreadyMoved,

    #[error("creature has already attacked this turn")]
    AlreadyActed,

    #[error("unknown creature type")]
    UnknownCreatureType,

    #[error("melee attack blocked by a guarding tank")]
    BlockedByGuard,

    #[error("unrecognized action")]
    UnrecognizedAction,

    #[error("no such creature")]
    UnknownCreature,

    #[error("cell is off the board")]
    OffBoard,

    #[error("creature type is not in hand")]
    NotInHand,

    #[error("target is not an enemy creature")]
    InvalidTarget,

    #[error("tower cells cannot change owner")]
    ProtectedCell,
}
