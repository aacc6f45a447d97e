//! Hexfront - two-player hex territory game rules engine

pub mod board;
pub mod catalog;
pub mod core;
pub mod game;
pub mod rules;
pub mod session;
pub mod turn;
