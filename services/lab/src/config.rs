//! services/lab/src/config.rs
//!
//! Defines the lab's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Credentials and profile of the `Owner` account created at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnerSeed {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub owner: Option<OwnerSeed>,
    pub auto_login: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Owner Account Seed ---
        let owner = match (lookup("LAB_OWNER_USER"), lookup("LAB_OWNER_PASSWORD")) {
            (Some(username), Some(password)) => Some(OwnerSeed {
                username,
                password,
                name: lookup("LAB_OWNER_NAME").unwrap_or_else(|| "Owner".to_string()),
                email: lookup("LAB_OWNER_EMAIL").unwrap_or_else(|| "owner@lab.local".to_string()),
                address: lookup("LAB_OWNER_ADDRESS").unwrap_or_default(),
            }),
            (Some(_), None) => {
                return Err(ConfigError::MissingVar("LAB_OWNER_PASSWORD".to_string()))
            }
            (None, Some(_)) => return Err(ConfigError::MissingVar("LAB_OWNER_USER".to_string())),
            (None, None) => None,
        };

        let auto_login = match lookup("LAB_AUTO_LOGIN") {
            None => false,
            Some(raw) => raw.parse::<bool>().map_err(|e| {
                ConfigError::InvalidValue("LAB_AUTO_LOGIN".to_string(), e.to_string())
            })?,
        };
        if auto_login && owner.is_none() {
            return Err(ConfigError::MissingVar("LAB_OWNER_USER".to_string()));
        }

        Ok(Self {
            log_level,
            owner,
            auto_login,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.owner.is_none());
        assert!(!config.auto_login);
    }

    #[test]
    fn owner_seed_requires_both_credentials() {
        let config = load(&[("LAB_OWNER_USER", "root"), ("LAB_OWNER_PASSWORD", "toor")]).unwrap();
        let owner = config.owner.unwrap();
        assert_eq!(owner.username, "root");
        assert_eq!(owner.email, "owner@lab.local");

        assert!(matches!(
            load(&[("LAB_OWNER_USER", "root")]),
            Err(ConfigError::MissingVar(var)) if var == "LAB_OWNER_PASSWORD"
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("RUST_LOG", "chatty")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "RUST_LOG"
        ));
        assert!(matches!(
            load(&[("LAB_AUTO_LOGIN", "yes")]),
            Err(ConfigError::InvalidValue(var, _)) if var == "LAB_AUTO_LOGIN"
        ));
    }

    #[test]
    fn auto_login_needs_an_owner() {
        assert!(matches!(
            load(&[("LAB_AUTO_LOGIN", "true")]),
            Err(ConfigError::MissingVar(var)) if var == "LAB_OWNER_USER"
        ));
        let config = load(&[
            ("LAB_AUTO_LOGIN", "true"),
            ("LAB_OWNER_USER", "root"),
            ("LAB_OWNER_PASSWORD", "toor"),
        ])
        .unwrap();
        assert!(config.auto_login);
    }
}
