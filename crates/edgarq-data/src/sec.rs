//! Company lookup and filing queries behind one handle.

use crate::edgar::{Company, CompanyLookup, Filing, FilingFilter, FilingQueryEngine};
use crate::error::Result;
use crate::fixtures;

/// Registry snapshot plus filing index.
///
/// ```
/// use edgarq_data::{SecClient, edgar::FilingFilter};
///
/// let companies = r#"{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}"#;
/// let filings = r#"{"0000320193": [{"company_name": "Apple Inc.", "form_type": "10-K",
///     "filing_date": "2024-11-01", "accession_number": "0000320193-24-000123"}]}"#;
///
/// let client = SecClient::from_fixtures(companies, Some(filings)).unwrap();
/// let found = client.company_filings("aapl", &FilingFilter::default()).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecClient {
    lookup: CompanyLookup,
    engine: FilingQueryEngine,
}

impl SecClient {
    /// Combine a registry and a filing index.
    pub const fn new(lookup: CompanyLookup, engine: FilingQueryEngine) -> Self {
        Self { lookup, engine }
    }

    /// Build from JSON fixtures. Without a filing index every filing query
    /// reports the CIK as not found.
    ///
    /// # Errors
    /// Returns error if either fixture fails to parse or validate
    pub fn from_fixtures(companies_json: &str, filings_json: Option<&str>) -> Result<Self> {
        let lookup = fixtures::companies_from_str(companies_json)?;
        let engine = match filings_json {
            Some(json) => fixtures::engine_from_str(json)?,
            None => FilingQueryEngine::new(),
        };
        Ok(Self::new(lookup, engine))
    }

    /// Registry snapshot
    pub const fn lookup(&self) -> &CompanyLookup {
        &self.lookup
    }

    /// Filing index
    pub const fn engine(&self) -> &FilingQueryEngine {
        &self.engine
    }

    /// Look up a company by ticker.
    ///
    /// # Errors
    /// See [`CompanyLookup::lookup`]
    pub fn lookup_company(&self, ticker: &str) -> Result<Company> {
        self.lookup.lookup(ticker)
    }

    /// List a company's filings by CIK.
    ///
    /// # Errors
    /// See [`FilingQueryEngine::list_filings`]
    pub fn list_filings(&self, cik: &str, filter: &FilingFilter) -> Result<Vec<Filing>> {
        self.engine.list_filings(cik, filter)
    }

    /// Look up a ticker, then list its filings.
    ///
    /// # Errors
    /// Any error from the lookup or the query
    pub fn company_filings(&self, ticker: &str, filter: &FilingFilter) -> Result<Vec<Filing>> {
        let company = self.lookup_company(ticker)?;
        self.list_filings(company.cik(), filter)
    }
}
