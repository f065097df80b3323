//! Command-line and environment configuration for the terminal front end.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::types::INPUT_DEBOUNCE_MS;

/// Upper bound for the input debounce window.
pub const MAX_DEBOUNCE_MS: u64 = 1000;
/// Upper bound for the render/input poll period.
pub const MAX_FRAME_MS: u64 = 1000;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "blockfall", version, about = "Oops! Not found. Maybe play tetris instead?")]
pub struct Args {
    /// Seed for the piece sequence (random when omitted)
    #[arg(long, env = "BLOCKFALL_SEED", value_name = "U64")]
    pub seed: Option<String>,

    /// Minimum time between accepted moves, in milliseconds
    #[arg(long, env = "BLOCKFALL_DEBOUNCE_MS", default_value_t = INPUT_DEBOUNCE_MS as u64)]
    pub debounce_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "BLOCKFALL_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Render and input poll period, in milliseconds
    #[arg(long, env = "BLOCKFALL_FRAME_MS", default_value_t = 16)]
    pub frame_ms: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid seed {0:?}: expected an unsigned 64-bit integer")]
    InvalidSeed(String),
    #[error("debounce of {0} ms exceeds the 1000 ms limit")]
    DebounceTooLong(u64),
    #[error("frame period must be between 1 and 1000 ms, got {0}")]
    FramePeriod(u64),
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub debounce: Duration,
    pub log_file: Option<PathBuf>,
    pub frame: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let seed = match args.seed {
            Some(text) => Some(
                text.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(text.clone()))?,
            ),
            None => None,
        };

        if args.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceTooLong(args.debounce_ms));
        }
        if args.frame_ms == 0 || args.frame_ms > MAX_FRAME_MS {
            return Err(ConfigError::FramePeriod(args.frame_ms));
        }

        Ok(Self {
            seed,
            debounce: Duration::from_millis(args.debounce_ms),
            log_file: args.log_file,
            frame: Duration::from_millis(args.frame_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            debounce: Duration::from_millis(INPUT_DEBOUNCE_MS as u64),
            log_file: None,
            frame: Duration::from_millis(16),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Self::from_args(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("blockfall").chain(argv.iter().copied()))
            .expect("argv should parse");
        Config::from_args(args)
    }

    #[test]
    fn defaults() {
        let args = Args {
            seed: None,
            debounce_ms: 50,
            log_file: None,
            frame_ms: 16,
        };
        assert_eq!(Config::from_args(args).unwrap(), Config::default());
    }

    #[test]
    fn seed_and_debounce_flags() {
        let config = parse(&["--seed", " 42 ", "--debounce-ms", "0"]).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.debounce, Duration::ZERO);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse(&["--seed", "abc"]),
            Err(ConfigError::InvalidSeed("abc".to_string()))
        );
        assert_eq!(
            parse(&["--debounce-ms", "1001"]),
            Err(ConfigError::DebounceTooLong(1001))
        );
        assert_eq!(parse(&["--frame-ms", "0"]), Err(ConfigError::FramePeriod(0)));
    }
}
