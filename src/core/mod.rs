//! Shared timing primitives and tuning constants.

pub mod constants;
pub mod timer;

pub use constants::*;
pub use timer::{TimerHandle, TimerQueue};
