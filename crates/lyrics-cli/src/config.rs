//! Runtime configuration.
//!
//! Loaded from environment variables and an optional `.env` file.

use std::env;
use std::time::Duration;

use dotenv::dotenv;
use lyrics::FetchOptions;
use tracing::warn;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the command-line tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// User-Agent sent with page requests (`LYRICS_USER_AGENT`)
    pub user_agent: Option<String>,
    /// Request timeout in seconds (`LYRICS_TIMEOUT_SECS`)
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Self {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(user_agent) = var("LYRICS_USER_AGENT").filter(|ua| !ua.trim().is_empty()) {
            config.user_agent = Some(user_agent);
        }

        if let Some(timeout) = var("LYRICS_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => warn!(value = %timeout, "ignoring invalid LYRICS_TIMEOUT_SECS"),
            }
        }

        config
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}
