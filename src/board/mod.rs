//! Board model - hex geometry, cells, territory

pub mod board_map;
pub mod hex;

pub use board_map::{Board, Cell, ControlledHexes};
pub use hex::{AxialCoord, HexCoord, HexSide};
