//! Meter configuration
//!
//! Loaded from environment variables, falling back to defaults.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEBOUNCE_ENV: &str = "PWD_METER_DEBOUNCE_MS";
pub const MAX_SUGGESTIONS_ENV: &str = "PWD_METER_MAX_SUGGESTIONS";

const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Settings for callers that drive the evaluator from an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterConfig {
    /// Delay before an async evaluation runs.
    pub debounce: Duration,
    /// How many suggestions a meter shows.
    pub max_visible_suggestions: usize,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            max_visible_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl MeterConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_METER_DEBOUNCE_MS`: debounce delay in milliseconds (default 300)
    /// - `PWD_METER_MAX_SUGGESTIONS`: visible suggestion count (default 3)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ms) = read_var::<u64>(DEBOUNCE_ENV)? {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(max) = read_var::<usize>(MAX_SUGGESTIONS_ENV)? {
            config.max_visible_suggestions = max;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Meter config loaded: debounce={:?}, max_visible_suggestions={}",
            config.debounce,
            config.max_visible_suggestions
        );

        Ok(config)
    }
}

fn read_var<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        Err(_) => Ok(None),
    }
}
