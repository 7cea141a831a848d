//! Provider configuration from the environment.
//!
//! | Variable                 | Default                            |
//! |--------------------------|------------------------------------|
//! | `STOCKDASH_BASE_URL`     | `https://query1.finance.yahoo.com` |
//! | `STOCKDASH_TIMEOUT_SECS` | `30`                               |

use std::time::Duration;

use stockdash_api::Client;

pub const BASE_URL_VAR: &str = "STOCKDASH_BASE_URL";
pub const TIMEOUT_VAR: &str = "STOCKDASH_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the quote provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// `None` uses the client's production URL.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let timeout_secs = lookup(TIMEOUT_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Replaces the base URL when `base_url` is set. Used for CLI overrides.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    pub fn build_client(&self) -> Client {
        let client = match &self.base_url {
            Some(url) => Client::with_base_url(url),
            None => Client::new(),
        };
        client.with_timeout(self.timeout)
    }
}
