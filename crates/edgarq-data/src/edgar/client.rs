//! SEC EDGAR API client with rate limiting.

use super::company::{CompanyLookup, CompanyRecord, pad_cik};
use super::filings::Filing;
use crate::config::EdgarConfig;
use crate::error::{DataError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

/// Company submissions from the SEC submissions API
#[derive(Debug, Clone, Deserialize)]
pub struct Submissions {
    /// CIK number (unpadded in SEC responses)
    pub cik: String,
    /// Company name
    pub name: String,
    /// Filing history container
    pub filings: FilingsContainer,
}

/// Container for filings data
#[derive(Debug, Clone, Deserialize)]
pub struct FilingsContainer {
    /// Recent filings
    pub recent: FilingsRecent,
}

/// Recent filings data.
///
/// The SEC API returns filing information as parallel arrays where
/// each index corresponds to a single filing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilingsRecent {
    /// Accession numbers
    pub accession_number: Vec<String>,
    /// Filing dates
    pub filing_date: Vec<String>,
    /// Form types (e.g., "10-K", "10-Q")
    pub form: Vec<String>,
}

impl Submissions {
    /// Convert the parallel arrays into filings for `cik`.
    ///
    /// Rows with a malformed date or blank field are skipped with a warning;
    /// rows past the shortest array are ignored.
    pub fn into_filings(self, cik: &str) -> Vec<Filing> {
        let recent = self.filings.recent;
        let rows = recent
            .accession_number
            .len()
            .min(recent.filing_date.len())
            .min(recent.form.len());

        let mut filings = Vec::with_capacity(rows);
        for i in 0..rows {
            match Filing::parse(
                cik,
                &self.name,
                &recent.form[i],
                &recent.filing_date[i],
                &recent.accession_number[i],
            ) {
                Ok(filing) => filings.push(filing),
                Err(e) => warn!(cik, row = i, error = %e, "skipping submission row"),
            }
        }
        filings
    }
}

/// Rate limiter to ensure we don't exceed SEC's rate limits
#[derive(Debug)]
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// SEC EDGAR API client with rate limiting.
///
/// Requests are sent one at a time and never retried; a failed request is
/// reported to the caller as is.
pub struct EdgarClient {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    config: EdgarConfig,
}

impl EdgarClient {
    /// Create a new EDGAR client with default settings (10 req/sec)
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_config(EdgarConfig::default())
    }

    /// Create a new EDGAR client from explicit settings
    ///
    /// # Example
    /// ```no_run
    /// use edgarq_data::{EdgarConfig, edgar::EdgarClient};
    ///
    /// # fn example() -> edgarq_data::Result<()> {
    /// // 5 requests per second
    /// let config = EdgarConfig { rate_limit_ms: 200, ..EdgarConfig::default() };
    /// let client = EdgarClient::with_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(DataError::Network)?;

        Ok(Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(config.rate_limit()))),
            config,
        })
    }

    /// Settings this client was built with
    pub const fn config(&self) -> &EdgarConfig {
        &self.config
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.lock().await.wait().await;

        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DataError::Network)?;

        if !response.status().is_success() {
            return Err(DataError::Http(format!(
                "GET {} returned HTTP {}",
                url,
                response.status()
            )));
        }
        Ok(response)
    }

    /// Fetch the ticker registry snapshot.
    ///
    /// # Errors
    /// Returns error if the request fails or the registry cannot be parsed
    pub async fn fetch_registry(&self) -> Result<CompanyLookup> {
        let response = self.get(&self.config.tickers_url).await?;

        // Parse as a map of index -> CompanyRecord
        let data: HashMap<String, CompanyRecord> = response.json().await?;
        debug!(companies = data.len(), "fetched ticker registry");

        CompanyLookup::from_records(data.into_values())
    }

    /// Fetch all recent filings for a company.
    ///
    /// # Arguments
    /// * `cik` - Company's CIK number (can be with or without padding)
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` for a malformed CIK, otherwise
    /// network and decoding errors
    pub async fn fetch_filings(&self, cik: &str) -> Result<Vec<Filing>> {
        let cik_padded = pad_cik(cik)?;
        let url = format!("{}/submissions/CIK{}.json", self.config.base_url, cik_padded);

        let response = self.get(&url).await?;
        let submissions: Submissions = response.json().await?;
        let filings = submissions.into_filings(&cik_padded);
        debug!(cik = %cik_padded, filings = filings.len(), "fetched submissions");

        Ok(filings)
    }
}

impl std::fmt::Debug for EdgarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgarClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMISSIONS: &str = r#"{
        "cik": "320193",
        "name": "Apple Inc.",
        "filings": {
            "recent": {
                "accessionNumber": ["0000320193-24-000123", "0000320193-24-000100", "bad-row"],
                "filingDate": ["2024-11-01", "2024-08-01", "2024-99-99"],
                "form": ["10-K", "10-Q", "8-K"],
                "primaryDocument": ["aapl-20240928.htm", "aapl-20240629.htm", "x.htm"]
            }
        }
    }"#;

    #[test]
    fn test_submissions_into_filings() {
        let submissions: Submissions = serde_json::from_str(SUBMISSIONS).unwrap();
        let filings = submissions.into_filings("0000320193");

        // malformed third row is dropped
        assert_eq!(filings.len(), 2);
        assert_eq!(filings[0].cik(), "0000320193");
        assert_eq!(filings[0].company_name(), "Apple Inc.");
        assert_eq!(filings[1].form_type(), "10-Q");
    }

    #[test]
    fn test_debug_hides_http_client() {
        let client = EdgarClient::new().unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("data.sec.gov"));
    }

    #[tokio::test]
    async fn test_rate_limiter_spacing() {
        let mut limiter = RateLimiter::new(Duration::from_millis(50));
        let start = Instant::now();

        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;

        // first call is free, the next two wait a full interval each
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_fetch_filings_rejects_bad_cik() {
        let client = EdgarClient::new().unwrap();
        let result = client.fetch_filings("not-a-cik").await;
        assert!(matches!(result, Err(DataError::InvalidInput(_))));
    }

    #[tokio::test]
    #[ignore = "requires network access to sec.gov"]
    async fn test_fetch_registry_live() {
        let client = EdgarClient::new().unwrap();
        let registry = client.fetch_registry().await.unwrap();
        let company = registry.lookup("aapl").unwrap();
        assert_eq!(company.cik(), "0000320193");
    }

    #[tokio::test]
    #[ignore = "requires network access to sec.gov"]
    async fn test_fetch_filings_live() {
        let client = EdgarClient::new().unwrap();
        let filings = client.fetch_filings("320193").await.unwrap();
        assert!(filings.iter().any(|f| f.form_type() == "10-K"));
    }
}
