//! Runtime configuration read from the environment.
//!
//! `main` loads a `.env` file (if present) before this is read, so every
//! variable can also live there.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default daemon endpoint.
pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:50051";

/// Default lookup timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `SLUGPATH_TIMEOUT_MS` is not an integer.
    #[error("SLUGPATH_TIMEOUT_MS must be a whole number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
    /// Recording and replaying were both requested.
    #[error("SLUGPATH_RECORD and SLUGPATH_REPLAY cannot be set at the same time")]
    RecordAndReplay,
}

/// How project lookups reach the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMode {
    /// Talk to the daemon directly.
    Live,
    /// Talk to the daemon and write every lookup to a cassette file.
    Record(PathBuf),
    /// Serve lookups from a cassette file.
    Replay(PathBuf),
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the daemon.
    pub daemon_url: String,
    /// Per-request timeout for lookups.
    pub timeout: Duration,
    /// Lookup mode.
    pub mode: LookupMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            daemon_url: DEFAULT_DAEMON_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            mode: LookupMode::Live,
        }
    }
}

impl AppConfig {
    /// Reads configuration from `SLUGPATH_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the modes conflict.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the modes conflict.
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let daemon_url = non_empty("SLUGPATH_DAEMON_URL").map_or_else(
            || DEFAULT_DAEMON_URL.to_string(),
            |url| url.trim_end_matches('/').to_string(),
        );

        let timeout = match non_empty("SLUGPATH_TIMEOUT_MS") {
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout(raw))?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        let mode = match (non_empty("SLUGPATH_RECORD"), non_empty("SLUGPATH_REPLAY")) {
            (Some(_), Some(_)) => return Err(ConfigError::RecordAndReplay),
            (Some(path), None) => LookupMode::Record(PathBuf::from(path)),
            (None, Some(path)) => LookupMode::Replay(PathBuf::from(path)),
            (None, None) => LookupMode::Live,
        };

        Ok(Self { daemon_url, timeout, mode })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = config_from(&[
            ("SLUGPATH_DAEMON_URL", "http://localhost:9000/"),
            ("SLUGPATH_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.daemon_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = config_from(&[("SLUGPATH_TIMEOUT_MS", "soon")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".into()));
    }

    #[test]
    fn selects_record_or_replay() {
        let record = config_from(&[("SLUGPATH_RECORD", "/tmp/a.yaml")]).unwrap();
        assert_eq!(record.mode, LookupMode::Record(PathBuf::from("/tmp/a.yaml")));

        let replay = config_from(&[("SLUGPATH_REPLAY", "/tmp/b.yaml")]).unwrap();
        assert_eq!(replay.mode, LookupMode::Replay(PathBuf::from("/tmp/b.yaml")));
    }

    #[test]
    fn record_and_replay_conflict() {
        let err = config_from(&[("SLUGPATH_RECORD", "a"), ("SLUGPATH_REPLAY", "b")]).unwrap_err();
        assert_eq!(err, ConfigError::RecordAndReplay);
    }
}
