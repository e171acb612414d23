//! Configuration management for the user builder demo.
//!
//! Settings are read once at startup from environment variables, after
//! loading a `.env` file if one is present.

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;
use std::sync::Arc;

/// Date format accepted by `USER_BUILDER_TODAY`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Date the builders treat as "today". `None` means the system clock.
    pub today: Option<NaiveDate>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `USER_BUILDER_TODAY`: Pin the current date, as `YYYY-MM-DD`
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let today = Self::parse_env_date("USER_BUILDER_TODAY")?;

        Ok(Config { log_level, today })
    }

    /// The clock builders should validate birth dates against.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }

    /// Parse an optional environment variable as a calendar date.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), DATE_FORMAT)
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            today: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.today, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_pinned_date() {
        let mut guard = EnvGuard::new();
        guard.set("USER_BUILDER_TODAY", "2024-03-15");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(config.today, Some(date));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.clock().today(), date);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_date() {
        let mut guard = EnvGuard::new();
        guard.set("USER_BUILDER_TODAY", "15/03/2024");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "USER_BUILDER_TODAY");
                assert!(reason.contains("15/03/2024"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_date_missing() {
        env::remove_var("USER_BUILDER_TODAY_UNSET");
        let result = Config::parse_env_date("USER_BUILDER_TODAY_UNSET");
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_clock_defaults_to_system() {
        let config = Config::default();
        let before = chrono::Local::now().date_naive();
        let today = config.clock().today();
        let after = chrono::Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
