//! Frolic - a terminal birthday arcade.
//!
//! Library half of the binary: engines, gate, site state and rendering are
//! exposed here so integration tests can drive them without a terminal.

pub mod build_info;
pub mod core;
pub mod games;
pub mod gate;
pub mod input;
pub mod site;
pub mod ui;
pub mod utils;
