use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use raffle_core::{DEFAULT_ITERATIONS, RevealTiming};
use raffle_types::ui::UiOptions;

/// Contents of `~/.raffle/config.toml`. Every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaffleConfig {
    pub app: Option<AppConfig>,
    pub draw: Option<DrawConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the winner highlight animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Reveal cadence and randomness.
///
/// ```toml
/// [draw]
/// iterations = 30
/// base_delay_ms = 50
/// delay_step_ms = 10
/// seed = 42
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawConfig {
    pub iterations: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub delay_step_ms: Option<u64>,
    /// Fixed RNG seed for reproducible draws. Absent means OS entropy.
    pub seed: Option<u64>,
}

/// Upper bound on configured iterations.
const MAX_ITERATIONS: u32 = 500;

impl DrawConfig {
    #[must_use]
    pub fn timing(&self) -> RevealTiming {
        let defaults = RevealTiming::default();
        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        if iterations > MAX_ITERATIONS {
            tracing::warn!(
                iterations,
                max = MAX_ITERATIONS,
                "Configured reveal iterations clamped"
            );
        }
        RevealTiming {
            iterations: iterations.min(MAX_ITERATIONS),
            base_delay: self
                .base_delay_ms
                .map_or(defaults.base_delay, Duration::from_millis),
            delay_step: self
                .delay_step_ms
                .map_or(defaults.delay_step, Duration::from_millis),
        }
    }
}

impl RaffleConfig {
    /// Load the user config. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    #[must_use]
    pub fn timing(&self) -> RevealTiming {
        self.draw
            .as_ref()
            .map_or_else(RevealTiming::default, DrawConfig::timing)
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.draw.as_ref().and_then(|draw| draw.seed)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".raffle").join("config.toml"))
}
