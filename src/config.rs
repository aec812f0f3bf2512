//! Configuration management for the contact book.
//!
//! All settings are optional and come from environment variables (or a
//! `.env` file, if present). An empty environment yields the defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::level_filters::LevelFilter;

/// Default number of contacts the store accepts.
pub const DEFAULT_MAX_CONTACTS: usize = 50;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of stored contacts (default: 50)
    pub max_contacts: usize,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_MAX_CONTACTS`: Store capacity (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints, so stdout stays reserved for the session
        let _ = dotenvy::dotenv();

        let max_contacts = Self::parse_env_usize("CONTACT_BOOK_MAX_CONTACTS", DEFAULT_MAX_CONTACTS)?;
        if max_contacts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_MAX_CONTACTS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!(
                    "Must be one of off, error, warn, info, debug, trace, got: {}",
                    log_level
                ),
            });
        }

        Ok(Config {
            max_contacts,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_contacts: DEFAULT_MAX_CONTACTS,
            log_level: "error".to_string(),
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
        assert_eq!(config.max_contacts, 50);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_BOOK_MAX_CONTACTS");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_contacts, DEFAULT_MAX_CONTACTS);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_MAX_CONTACTS", "5");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.max_contacts, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_capacity() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_MAX_CONTACTS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_MAX_CONTACTS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_unknown_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "bogus");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_log_level_case_insensitive() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "WARN");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "WARN");
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "fifty");

        let result = Config::parse_env_usize("TEST_USIZE_INVALID", 10);
        assert!(result.is_err());

        let result = Config::parse_env_usize("NONEXISTENT_USIZE", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
