//! Configuration
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults ([`Config::default`])
//! 2. a TOML file: `--config <path>` if given, else `sortty.toml` in the
//!    working directory when it exists
//! 3. environment: `SORTTY_STORE_DIR`, `SORTTY_SPEED`, `SORTTY_ALGORITHM`
//!
//! Bad environment values are ignored and handed back as
//! [`RejectedOverride`]s for the caller to log once logging is up; a bad file
//! is an error.

use crate::algorithm::Algorithm;
use crate::driver::{DEFAULT_ARRAY, MAX_SPEED, MIN_SPEED};
use crate::errors::InputError;
use crate::steps::Value;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "sortty.toml";

/// An environment override that was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for RejectedOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} '{}', ignoring: {}", self.key, self.value, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Array shown at startup and restored by reset
    pub default_array: Vec<Value>,

    /// Initial speed, clamped to the selectable range
    pub speed: u32,

    /// Algorithm selected at startup
    pub algorithm: Algorithm,

    /// Directory for saved visualizations
    pub store_dir: PathBuf,

    /// Write logs here while the TUI owns the terminal
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_array: DEFAULT_ARRAY.to_vec(),
            speed: 10,
            algorithm: Algorithm::default(),
            store_dir: PathBuf::from(".sortty/visualizations"),
            log_file: None,
        }
    }
}

impl Config {
    /// Load defaults, then the file layer, then environment overrides.
    ///
    /// Overrides that did not parse are returned alongside the config.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<(Config, Vec<RejectedOverride>)> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.is_file() {
                    Self::from_file(local)?
                } else {
                    Config::default()
                }
            }
        };
        let rejected = config.apply_env_overrides();
        config.validate()?;
        Ok((config, rejected))
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("parse config '{}'", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env_overrides(&mut self) -> Vec<RejectedOverride> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; split out so tests need not touch
    /// the process environment
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<RejectedOverride> {
        let mut rejected = Vec::new();

        if let Some(raw) = lookup("SORTTY_STORE_DIR") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.store_dir = PathBuf::from(trimmed);
            }
        }

        if let Some(raw) = lookup("SORTTY_SPEED") {
            match raw.trim().parse::<u32>() {
                Ok(speed) => self.speed = speed,
                Err(err) => rejected.push(RejectedOverride {
                    key: "SORTTY_SPEED",
                    reason: err.to_string(),
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup("SORTTY_ALGORITHM") {
            match raw.parse::<Algorithm>() {
                Ok(algorithm) => self.algorithm = algorithm,
                Err(err) => rejected.push(RejectedOverride {
                    key: "SORTTY_ALGORITHM",
                    reason: err.to_string(),
                    value: raw,
                }),
            }
        }

        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        rejected
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.default_array.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(())
    }
}
