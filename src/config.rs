//! Startup configuration from the process environment

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid {0}: {1}")]
    Invalid(&'static str, String),
}

/// Runtime configuration, read once at startup.
/// The caller is expected to have loaded `.env` first.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote account store
    pub api_base_url: String,
    /// Identifier of the signed-in user
    pub account_email: String,
    pub starting_balance: f64,
    /// How long the surface keeps a validation message visible
    pub alert_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("BANK_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let account_email =
            std::env::var("ACCOUNT_EMAIL").map_err(|_| ConfigError::Missing("ACCOUNT_EMAIL"))?;

        let starting_balance = match std::env::var("STARTING_BALANCE") {
            Ok(raw) => raw
                .parse::<f64>()
                .map_err(|e| ConfigError::Invalid("STARTING_BALANCE", e.to_string()))?,
            Err(_) => 0.0,
        };

        let alert_timeout = match std::env::var("ALERT_TIMEOUT_MS") {
            Ok(raw) => {
                let ms = raw
                    .parse::<u64>()
                    .map_err(|e| ConfigError::Invalid("ALERT_TIMEOUT_MS", e.to_string()))?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(5000),
        };

        Ok(Config {
            api_base_url,
            account_email,
            starting_balance,
            alert_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test drives every scenario: the environment is process-global and
    // the test harness runs in parallel
    #[test]
    fn reads_defaults_and_rejects_malformed_values() {
        std::env::remove_var("BANK_API_URL");
        std::env::remove_var("ACCOUNT_EMAIL");
        std::env::remove_var("STARTING_BALANCE");
        std::env::remove_var("ALERT_TIMEOUT_MS");

        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("ACCOUNT_EMAIL"))
        ));

        std::env::set_var("ACCOUNT_EMAIL", "user@example.com");
        let config = Config::from_env().expect("defaults apply");
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.starting_balance, 0.0);
        assert_eq!(config.alert_timeout, Duration::from_millis(5000));

        std::env::set_var("STARTING_BALANCE", "not-a-number");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("STARTING_BALANCE", _))
        ));

        std::env::set_var("STARTING_BALANCE", "250.75");
        std::env::set_var("ALERT_TIMEOUT_MS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("ALERT_TIMEOUT_MS", _))
        ));

        std::env::set_var("ALERT_TIMEOUT_MS", "1500");
        std::env::set_var("BANK_API_URL", "http://localhost:8080");
        let config = Config::from_env().expect("full environment");
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.account_email, "user@example.com");
        assert_eq!(config.starting_balance, 250.75);
        assert_eq!(config.alert_timeout, Duration::from_millis(1500));
    }
}
