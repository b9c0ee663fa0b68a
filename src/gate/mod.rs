//! Loading-dance gate.
//!
//! The first screen: a dancer performs while the visitor waits, then a name
//! form appears. The name is checked against the celebration backend and the
//! visitor is routed to the birthday or the well-wishers greeting.

pub mod logic;
pub mod types;
pub mod verifier;

pub use logic::*;
pub use types::*;
pub use verifier::{FixedVerifier, HttpNameVerifier, NameVerifier, VerifyError};
