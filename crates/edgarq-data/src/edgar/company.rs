//! Company identity and ticker-to-CIK lookup.
//!
//! CIK (Central Index Key) is a unique identifier assigned by the SEC to
//! companies filing with EDGAR. The registry snapshot stores it as a bare
//! number; everything in this crate carries it zero-padded to 10 digits.

use crate::error::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of digits in a canonical CIK.
pub const CIK_LEN: usize = 10;

/// Pad a CIK to 10 digits as required by SEC.
///
/// Surrounding whitespace is ignored. The value must be 1 to 10 ASCII digits.
///
/// # Example
/// ```
/// # use edgarq_data::edgar::company::pad_cik;
/// assert_eq!(pad_cik("320193").unwrap(), "0000320193");
/// assert!(pad_cik("12a").is_err());
/// ```
///
/// # Errors
/// Returns `DataError::InvalidInput` for empty, non-numeric or over-long input
pub fn pad_cik(cik: &str) -> Result<String> {
    let cik = cik.trim();
    if cik.is_empty() {
        return Err(DataError::invalid("CIK cannot be empty"));
    }
    if !cik.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DataError::invalid(format!("CIK '{cik}' must be numeric")));
    }
    if cik.len() > CIK_LEN {
        return Err(DataError::invalid(format!(
            "CIK '{cik}' is longer than {CIK_LEN} digits"
        )));
    }
    Ok(format!("{cik:0>10}"))
}

/// Trim and uppercase a ticker symbol.
///
/// # Errors
/// Returns `DataError::InvalidInput` if nothing is left after trimming
pub fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(DataError::invalid("Ticker cannot be empty"));
    }
    Ok(ticker.to_uppercase())
}

fn is_canonical_cik(cik: &str) -> bool {
    cik.len() == CIK_LEN && cik.bytes().all(|b| b.is_ascii_digit())
}

/// A company registered with SEC EDGAR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Company {
    ticker: String,
    cik: String,
    name: String,
}

impl Company {
    /// Create a company, normalizing the ticker to uppercase.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if the ticker or name is blank, or
    /// the CIK is not exactly 10 digits
    pub fn new(ticker: &str, cik: &str, name: &str) -> Result<Self> {
        let ticker = normalize_ticker(ticker)?;
        if !is_canonical_cik(cik) {
            return Err(DataError::invalid(format!(
                "CIK '{cik}' must be exactly {CIK_LEN} digits"
            )));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(DataError::invalid("Company name cannot be empty"));
        }

        Ok(Self {
            ticker,
            cik: cik.to_string(),
            name: name.to_string(),
        })
    }

    /// Uppercase ticker symbol
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Zero-padded 10-digit CIK
    pub fn cik(&self) -> &str {
        &self.cik
    }

    /// Registered company name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) CIK {}", self.name, self.ticker, self.cik)
    }
}

/// CIK as found in the registry: SEC ships a number, hand-written fixtures
/// sometimes use a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCik {
    /// Numeric form, e.g. `320193`
    Number(u64),
    /// Text form, e.g. `"320193"` or `"0000320193"`
    Text(String),
}

impl RawCik {
    /// Zero-padded form of this CIK.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if the value is not a valid CIK
    pub fn padded(&self) -> Result<String> {
        match self {
            Self::Number(n) => pad_cik(&n.to_string()),
            Self::Text(s) => pad_cik(s),
        }
    }
}

/// Raw company ticker data from the SEC registry JSON.
///
/// The registry is `{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}, ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRecord {
    /// CIK (SEC returns this as an integer despite the name)
    pub cik_str: RawCik,
    /// Ticker symbol
    pub ticker: String,
    /// Company name
    pub title: String,
}

/// Lookup table for converting ticker symbols to companies.
#[derive(Debug, Clone, Default)]
pub struct CompanyLookup {
    /// Map from uppercase ticker to (padded CIK, company name)
    ticker_to_cik: HashMap<String, (String, String)>,
}

impl CompanyLookup {
    /// Build the lookup from registry records.
    ///
    /// Tickers are stored uppercase. When two records share a ticker the
    /// later one wins.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if any record has a blank ticker or
    /// an unusable CIK
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CompanyRecord>,
    {
        let mut ticker_to_cik = HashMap::new();
        for record in records {
            let ticker = normalize_ticker(&record.ticker)?;
            let cik = record.cik_str.padded().map_err(|e| {
                DataError::invalid(format!("Registry entry for {ticker}: {e}"))
            })?;
            ticker_to_cik.insert(ticker, (cik, record.title));
        }

        Ok(Self { ticker_to_cik })
    }

    /// Look up a company by ticker symbol (case-insensitive).
    ///
    /// # Example
    /// ```
    /// # use edgarq_data::edgar::company::{CompanyLookup, CompanyRecord, RawCik};
    /// let lookup = CompanyLookup::from_records([CompanyRecord {
    ///     cik_str: RawCik::Number(320193),
    ///     ticker: "AAPL".to_string(),
    ///     title: "Apple Inc.".to_string(),
    /// }])
    /// .unwrap();
    ///
    /// let company = lookup.lookup(" aapl ").unwrap();
    /// assert_eq!(company.cik(), "0000320193");
    /// ```
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` for a blank ticker and
    /// `DataError::NotFound` if no registry entry matches
    pub fn lookup(&self, ticker: &str) -> Result<Company> {
        let ticker = normalize_ticker(ticker)?;
        let (cik, name) = self
            .ticker_to_cik
            .get(&ticker)
            .ok_or_else(|| DataError::NotFound(format!("Ticker '{ticker}' not found")))?;

        Company::new(&ticker, cik, name)
    }

    /// Check whether a ticker is present.
    pub fn contains(&self, ticker: &str) -> bool {
        normalize_ticker(ticker).is_ok_and(|t| self.ticker_to_cik.contains_key(&t))
    }

    /// Get all tickers in the lookup table, sorted.
    pub fn tickers(&self) -> Vec<&str> {
        let mut tickers: Vec<&str> = self.ticker_to_cik.keys().map(|s| s.as_str()).collect();
        tickers.sort_unstable();
        tickers
    }

    /// Number of registered tickers.
    pub fn len(&self) -> usize {
        self.ticker_to_cik.len()
    }

    /// True when the registry holds no tickers.
    pub fn is_empty(&self) -> bool {
        self.ticker_to_cik.is_empty()
    }
}
