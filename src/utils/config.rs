//! Runtime configuration: `~/.frolic/config.json` plus command-line overrides.

use super::persistence;
use crate::core::constants::DEFAULT_VERIFY_ENDPOINT;
use crate::games::{MatchUpConfig, SnakeConfig};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the name gate POSTs the visitor's name.
    pub verify_endpoint: String,
    /// Go straight to the site without the name gate.
    pub skip_gate: bool,
    /// Seed both games for reproducible decks and food.
    pub seed: Option<u64>,
    pub matchup: MatchUpConfig,
    pub snake: SnakeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verify_endpoint: DEFAULT_VERIFY_ENDPOINT.to_string(),
            skip_gate: false,
            seed: None,
            matchup: MatchUpConfig::default(),
            snake: SnakeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the data directory, falling back to defaults.
    pub fn load() -> Self {
        persistence::load_json_or_default(CONFIG_FILE_NAME)
    }

    pub fn save(&self) -> std::io::Result<()> {
        persistence::save_json(CONFIG_FILE_NAME, self)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run,
    Version,
    Help,
}

pub const USAGE: &str = "Frolic - a terminal birthday arcade

Usage: frolic [options]

Options:
  --seed <N>        Seed the games for reproducible runs
  --skip-gate       Skip the name gate and open the site directly
  --endpoint <URL>  Name verification endpoint
  --version         Show version information
  --help            Show this help message";

/// Apply command-line arguments (without the program name) on top of `config`.
pub fn apply_args<I, S>(config: &mut AppConfig, args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--skip-gate" => config.skip_gate = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .as_ref()
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value.as_ref()))?;
                config.seed = Some(seed);
            }
            "--endpoint" => {
                let value = args.next().ok_or("--endpoint needs a URL")?;
                config.verify_endpoint = value.as_ref().to_string();
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(CliCommand::Run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.verify_endpoint, "http://localhost:5000/api/users/auth");
        assert!(!config.skip_gate);
        assert_eq!(config.snake.grid_size, 20);
        assert_eq!(config.matchup.pairs, 8);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"skip_gate": true, "snake": {"milestone": 3}}"#).unwrap();
        assert!(config.skip_gate);
        assert_eq!(config.snake.milestone, 3);
        assert_eq!(config.snake.initial_interval_ms, 150);
        assert_eq!(config.matchup, MatchUpConfig::default());
    }

    #[test]
    fn test_args_override_config() {
        let mut config = AppConfig::default();
        let cmd = apply_args(
            &mut config,
            ["--seed", "42", "--skip-gate", "--endpoint", "http://example.test/auth"],
        );
        assert_eq!(cmd, Ok(CliCommand::Run));
        assert_eq!(config.seed, Some(42));
        assert!(config.skip_gate);
        assert_eq!(config.verify_endpoint, "http://example.test/auth");
    }

    #[test]
    fn test_version_and_help() {
        let mut config = AppConfig::default();
        assert_eq!(apply_args(&mut config, ["--version"]), Ok(CliCommand::Version));
        assert_eq!(apply_args(&mut config, ["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_bad_args() {
        let mut config = AppConfig::default();
        assert!(apply_args(&mut config, ["--seed"]).is_err());
        assert!(apply_args(&mut config, ["--seed", "cake"]).is_err());
        assert!(apply_args(&mut config, ["--dance"]).is_err());
    }
}
