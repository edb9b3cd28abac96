//! Evaluation and generation settings.
//!
//! Values come from explicit arguments or, via [`Config::from_env`], from the
//! environment with built-in defaults as fallback.

use crate::error::PasswordError;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;
pub const DEFAULT_SUGGESTION_LENGTH: usize = 12;

pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";
pub const SUGGESTION_COUNT_ENV: &str = "PWD_SUGGESTION_COUNT";
pub const SUGGESTION_LENGTH_ENV: &str = "PWD_SUGGESTION_LENGTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub min_length: usize,
    pub suggestion_count: usize,
    pub suggestion_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            suggestion_length: DEFAULT_SUGGESTION_LENGTH,
        }
    }
}

impl Config {
    /// Builds a config, rejecting zero for any field.
    pub fn new(
        min_length: usize,
        suggestion_count: usize,
        suggestion_length: usize,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            min_length: positive("min_length", min_length)?,
            suggestion_count: positive("suggestion_count", suggestion_count)?,
            suggestion_length: positive("suggestion_length", suggestion_length)?,
        })
    }

    /// Loads the config from the environment.
    ///
    /// Priority for each field:
    /// 1. Environment variable (`PWD_MIN_LENGTH`, `PWD_SUGGESTION_COUNT`,
    ///    `PWD_SUGGESTION_LENGTH`)
    /// 2. Built-in default
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a variable is set but is not a positive integer.
    pub fn from_env() -> Result<Self, PasswordError> {
        let defaults = Self::default();
        let config = Self {
            min_length: env_or(MIN_LENGTH_ENV, "min_length", defaults.min_length)?,
            suggestion_count: env_or(
                SUGGESTION_COUNT_ENV,
                "suggestion_count",
                defaults.suggestion_count,
            )?,
            suggestion_length: env_or(
                SUGGESTION_LENGTH_ENV,
                "suggestion_length",
                defaults.suggestion_length,
            )?,
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Config loaded: {:?}", config);

        Ok(config)
    }
}

fn positive(name: &'static str, value: usize) -> Result<usize, PasswordError> {
    if value == 0 {
        return Err(PasswordError::invalid(name, value));
    }
    Ok(value)
}

fn env_or(key: &str, name: &'static str, default: usize) -> Result<usize, PasswordError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {}={:?}: not a positive integer", key, raw);
            Err(PasswordError::invalid(name, raw))
        }
    }
}
