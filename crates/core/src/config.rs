//! Game configuration
//!
//! Defaults match the classic game. Every field can be overridden from the
//! environment; malformed values fall back to the default.

use std::env;
use std::path::PathBuf;

use crate::types::{RESOLVE_DELAY_TICKS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed. `None` seeds from the clock on start and on every restart.
    pub seed: Option<u32>,
    /// Frames two picked tiles stay revealed before resolution.
    pub resolve_delay_ticks: u32,
    /// Frame interval used by the frontend loop.
    pub tick_ms: u32,
    /// Append log records to this file (logging is off when unset).
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            resolve_delay_ticks: RESOLVE_DELAY_TICKS,
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `REMEMBER_ME_SEED`
    /// - `REMEMBER_ME_RESOLVE_TICKS`
    /// - `REMEMBER_ME_TICK_MS`
    /// - `REMEMBER_ME_LOG_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("REMEMBER_ME_SEED").and_then(|s| s.trim().parse().ok());

        let resolve_delay_ticks = lookup("REMEMBER_ME_RESOLVE_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.resolve_delay_ticks)
            .max(1);

        let tick_ms = lookup("REMEMBER_ME_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms)
            .max(1);

        let log_path = lookup("REMEMBER_ME_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            resolve_delay_ticks,
            tick_ms,
            log_path,
        }
    }

    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same config with a different resolution delay (at least one frame)
    pub fn with_resolve_delay(mut self, ticks: u32) -> Self {
        self.resolve_delay_ticks = ticks.max(1);
        self
    }
}
