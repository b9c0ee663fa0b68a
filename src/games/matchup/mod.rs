//! Match-Up memory game.
//!
//! Sixteen face-down cards hide eight party symbols in pairs. Two flips make
//! a move; equal symbols stay revealed, different ones flip back after a beat.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
