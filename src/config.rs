#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::OnceLock, time::Duration};

use crate::source::DEFAULT_LATENCY;

/// Environment variable overriding the simulated fetch latency.
pub const LATENCY_ENV: &str = "ROSTER_FETCH_LATENCY_MS";

/// Environment variable setting a fetch timeout. Unset or zero means no
/// timeout.
pub const TIMEOUT_ENV: &str = "ROSTER_FETCH_TIMEOUT_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fetch settings resolved from the environment and command line.
pub struct Settings {
    /// Simulated latency of the grade server.
    latency: Duration,
    /// Optional upper bound on how long a fetch may take.
    timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            timeout: None,
        }
    }
}

impl Settings {
    /// Creates settings from explicit values.
    pub fn new(latency: Duration, timeout: Option<Duration>) -> Self {
        Self { latency, timeout }
    }

    /// Reads settings from the process environment, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_env() -> Self {
        Self {
            latency: read_millis(LATENCY_ENV).unwrap_or(DEFAULT_LATENCY),
            timeout: read_millis(TIMEOUT_ENV).and_then(nonzero),
        }
    }

    /// Returns a copy with the given overrides applied. A zero timeout is
    /// ignored, as it could never let a fetch finish.
    pub fn with_overrides(mut self, latency: Option<Duration>, timeout: Option<Duration>) -> Self {
        if let Some(latency) = latency {
            self.latency = latency;
        }
        if let Some(timeout) = timeout.and_then(nonzero) {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Returns the simulated latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the fetch timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Settings read from the environment, resolved once per process.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Returns the environment-derived settings, reading them on first use.
pub fn settings() -> Settings {
    *SETTINGS.get_or_init(Settings::from_env)
}

/// Parses an environment variable holding milliseconds into a `Duration`.
fn read_millis(env: &str) -> Option<Duration> {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Drops zero durations.
fn nonzero(duration: Duration) -> Option<Duration> {
    (!duration.is_zero()).then_some(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_replace_given_values() {
        let base = Settings::new(Duration::from_millis(2000), Some(Duration::from_secs(9)));
        let merged = base.with_overrides(Some(Duration::from_millis(10)), None);
        assert_eq!(merged.latency(), Duration::from_millis(10));
        assert_eq!(merged.timeout(), Some(Duration::from_secs(9)));
    }

    #[test]
    fn zero_timeout_is_ignored() {
        let merged = Settings::default().with_overrides(None, Some(Duration::ZERO));
        assert_eq!(merged.timeout(), None);
        assert_eq!(nonzero(Duration::ZERO), None);
        assert_eq!(nonzero(Duration::from_millis(1)), Some(Duration::from_millis(1)));
    }

    #[test]
    fn defaults_match_simulated_server() {
        let settings = Settings::default();
        assert_eq!(settings.latency(), Duration::from_millis(2000));
        assert_eq!(settings.timeout(), None);
    }
}
