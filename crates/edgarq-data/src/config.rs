//! Settings for talking to SEC EDGAR.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Company ticker registry (hosted at www.sec.gov, not data.sec.gov)
pub const DEFAULT_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// SEC EDGAR API base URL
pub const DEFAULT_BASE_URL: &str = "https://data.sec.gov";

/// SEC requires identifying information in the User-Agent
pub const DEFAULT_USER_AGENT: &str = "edgarq/0.1 (contact@example.com)";

/// Connection settings for [`EdgarClient`](crate::edgar::EdgarClient).
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```
/// use edgarq_data::EdgarConfig;
///
/// let config = EdgarConfig::from_json_str(r#"{ "user_agent": "acme/1.0 (ops@acme.test)" }"#).unwrap();
/// assert_eq!(config.user_agent, "acme/1.0 (ops@acme.test)");
/// assert_eq!(config.rate_limit_ms, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgarConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// URL of the ticker registry snapshot
    pub tickers_url: String,
    /// Base URL of the submissions API
    pub base_url: String,
    /// Minimum milliseconds between requests (SEC allows 10 req/s)
    pub rate_limit_ms: u64,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tickers_url: DEFAULT_TICKERS_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit_ms: 100,
            timeout_secs: 30,
        }
    }
}

impl EdgarConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    /// Returns error if the JSON is malformed or the user agent is blank
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config from a JSON file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Minimum interval between requests.
    pub const fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }

    /// Per-request timeout.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(DataError::invalid("user_agent cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(DataError::invalid("timeout_secs must be at least 1"));
        }
        Ok(())
    }
}
