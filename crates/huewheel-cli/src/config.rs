//! Runtime configuration for the huewheel command.
//!
//! Layers, lowest priority first: built-in defaults, an optional JSON file,
//! `HUEWHEEL_*` environment variables, then command-line flags. The result is
//! handed to [`crate::run`] explicitly.

use std::path::{Path, PathBuf};

use huewheel_core::{MarkerStyle, WheelParams};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Environment variable overriding the occurrence threshold.
pub const ENV_THRESHOLD: &str = "HUEWHEEL_THRESHOLD";
/// Environment variable overriding the canvas size.
pub const ENV_SIZE: &str = "HUEWHEEL_SIZE";
/// Environment variable overriding the marker style.
pub const ENV_DRAW_AS: &str = "HUEWHEEL_DRAW_AS";

/// Default output file name, written next to the working directory.
const DEFAULT_OUTPUT: &str = "colourwheel.png";

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Image to analyze.
    pub input: PathBuf,
    /// Where the wheel PNG goes.
    pub output: PathBuf,
    /// Optional JSON report with exact counts.
    pub report: Option<PathBuf>,
    /// Shard the pixel scan across threads.
    pub parallel: bool,
    #[serde(flatten)]
    pub params: WheelParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: None,
            parallel: false,
            params: WheelParams::default(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from an environment lookup. Unparsable values are
    /// reported, not ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_THRESHOLD) {
            self.params.threshold = parse_env(ENV_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_SIZE) {
            self.params.size = parse_env(ENV_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_DRAW_AS) {
            self.params.draw_as = v
                .parse::<MarkerStyle>()
                .map_err(|reason| CliError::Env { var: ENV_DRAW_AS, reason })?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn apply_process_env(&mut self) -> Result<(), CliError> {
        self.apply_env(|key| std::env::var(key).ok())
    }
}

fn parse_env(var: &'static str, value: &str) -> Result<u32, CliError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| CliError::Env {
        var,
        reason: format!("'{value}': {e}"),
    })
}
