//! Configuration for the contact book.
//!
//! All settings are optional with defaults that reproduce the stock
//! behavior. Values are read from the environment, with a `.env` file loaded
//! first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_PROMPT: &str = "Enter a command: ";
#[cfg(feature = "birthdays")]
const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Runtime configuration for a session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each input line
    pub prompt: String,

    /// Days ahead (exclusive) scanned by the `birthdays` command
    /// (default: 7)
    #[cfg(feature = "birthdays")]
    pub birthday_window_days: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: the input prompt (default: `Enter a command: `)
    /// - `CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window in
    ///   days, 1-366 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; a missing file is not an error
        let _ = dotenvy::dotenv();

        let prompt =
            env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        #[cfg(feature = "birthdays")]
        let birthday_window_days = {
            let days = Self::parse_env_i64(
                "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS",
                DEFAULT_BIRTHDAY_WINDOW_DAYS,
            )?;
            if !(1..=366).contains(&days) {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                    reason: "Must be between 1 and 366".to_string(),
                });
            }
            days
        };

        Ok(Config {
            prompt,
            #[cfg(feature = "birthdays")]
            birthday_window_days,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    #[cfg(feature = "birthdays")]
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            #[cfg(feature = "birthdays")]
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}
