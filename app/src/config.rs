//! Configuration management for the EventEase host.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use eventease_services::DEFAULT_SESSION_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Session registry configuration
    pub sessions: SessionConfig,
    /// Event catalog configuration
    pub catalog: CatalogConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

/// Session registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in seconds (default: 7200, two hours)
    pub timeout_secs: i64,
}

/// Event catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Seed the three sample events at startup (default: true)
    pub seed_sample_events: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions: SessionConfig {
                timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
            },
            catalog: CatalogConfig {
                seed_sample_events: true,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `EVENTEASE_SESSION_TIMEOUT_SECS` | `7200` |
    /// | `EVENTEASE_SEED_SAMPLE_EVENTS` | `true` |
    /// | `RUST_LOG` | `info` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but cannot be parsed, or
    /// the session timeout is not positive.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = parse_or(
            &lookup,
            "EVENTEASE_SESSION_TIMEOUT_SECS",
            defaults.sessions.timeout_secs,
        )?;
        if timeout_secs <= 0 {
            return Err(ConfigError::NonPositiveTimeout(timeout_secs));
        }
        if chrono::Duration::try_seconds(timeout_secs).is_none() {
            return Err(ConfigError::TimeoutOutOfRange(timeout_secs));
        }

        Ok(Self {
            sessions: SessionConfig { timeout_secs },
            catalog: CatalogConfig {
                seed_sample_events: parse_or(
                    &lookup,
                    "EVENTEASE_SEED_SAMPLE_EVENTS",
                    defaults.catalog.seed_sample_events,
                )?,
            },
            telemetry: TelemetryConfig {
                log_level: lookup("RUST_LOG").unwrap_or(defaults.telemetry.log_level),
            },
        })
    }

    /// Session idle timeout as a duration.
    ///
    /// Saturates at [`chrono::Duration::MAX`] for values `from_lookup` would
    /// have rejected.
    #[must_use]
    pub fn session_timeout(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.sessions.timeout_secs).unwrap_or(chrono::Duration::MAX)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session_timeout(), chrono::Duration::hours(2));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("EVENTEASE_SESSION_TIMEOUT_SECS", " 300 "),
            ("EVENTEASE_SEED_SAMPLE_EVENTS", "false"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.sessions.timeout_secs, 300);
        assert!(!config.catalog.seed_sample_events);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[(
            "EVENTEASE_SESSION_TIMEOUT_SECS",
            "two hours",
        )]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "EVENTEASE_SESSION_TIMEOUT_SECS", .. }
        ));

        let err =
            Config::from_lookup(lookup_from(&[("EVENTEASE_SEED_SAMPLE_EVENTS", "yes")])).unwrap_err();
        assert!(err.to_string().contains("EVENTEASE_SEED_SAMPLE_EVENTS"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("EVENTEASE_SESSION_TIMEOUT_SECS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveTimeout(0));
    }

    #[test]
    fn oversized_timeout_is_rejected() {
        const KEY: &str = "EVENTEASE_SESSION_TIMEOUT_SECS";

        let max = i64::MAX.to_string();
        let err = Config::from_lookup(lookup_from(&[(KEY, max.as_str())])).unwrap_err();
        assert_eq!(err, ConfigError::TimeoutOutOfRange(i64::MAX));

        let largest = (i64::MAX / 1000).to_string();
        let config = Config::from_lookup(lookup_from(&[(KEY, largest.as_str())])).unwrap();
        assert_eq!(config.session_timeout().num_seconds(), i64::MAX / 1000);
    }

    #[test]
    fn session_timeout_saturates_instead_of_panicking() {
        let mut config = Config::default();
        config.sessions.timeout_secs = i64::MAX;
        assert_eq!(config.session_timeout(), chrono::Duration::MAX);
    }
}
