//! Runtime configuration.
//!
//! Loaded from environment variables; `main` reads a `.env` file first
//! when one exists.

use std::env;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Countdown defaults for the `session` command.
    pub session: SessionConfig,
    /// Cassette to record capability calls into (`CARESYNC_RECORD`).
    pub record_path: Option<PathBuf>,
    /// Cassette to replay capability calls from (`CARESYNC_REPLAY`).
    pub replay_path: Option<PathBuf>,
}

/// Session-timeout warning settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seconds left when the warning appears.
    pub initial_remaining: u32,
    /// Full length of the warning countdown.
    pub total: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { initial_remaining: 120, total: 300 }
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numbers keep their defaults; empty paths are ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = lookup("CARESYNC_SESSION_REMAINING_SECS").and_then(|v| v.parse().ok())
        {
            config.session.initial_remaining = secs;
        }
        if let Some(secs) = lookup("CARESYNC_SESSION_TOTAL_SECS").and_then(|v| v.parse().ok()) {
            config.session.total = secs;
        }

        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        config.record_path = path("CARESYNC_RECORD");
        config.replay_path = path("CARESYNC_REPLAY");

        config
    }
}
