//! Utility modules: config, logging, persistence.

pub mod config;
pub mod logger;
pub mod persistence;

pub use config::{apply_args, AppConfig, CliCommand};
