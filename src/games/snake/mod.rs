//! Classic Snake.
//!
//! A real-time game on a wrapping 20×20 grid. Arrow keys steer; the first
//! arrow press starts (or restarts) a run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
