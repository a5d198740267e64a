//! SEC EDGAR companies and filings.
//!
//! This module provides:
//! - Company lookup from ticker symbols with CIK normalization
//! - Validated filing records and filters
//! - The filter/sort/limit query over a company's filings
//! - A rate-limited client for the live EDGAR endpoints
//!
//! # Example
//!
//! ```no_run
//! use edgarq_data::edgar::{EdgarClient, FilingFilter, list_filings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgarClient::new()?;
//!     let registry = client.fetch_registry().await?;
//!     let company = registry.lookup("AAPL")?;
//!
//!     let filings = client.fetch_filings(company.cik()).await?;
//!     let filter = FilingFilter::builder().form_type("10-K").limit(3).build()?;
//!     for filing in list_filings(company.cik(), &filings, &filter)? {
//!         println!("{} {}", filing.filing_date(), filing.accession_number());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod company;
pub mod filings;
pub mod query;

pub use client::{EdgarClient, Submissions};
pub use company::{Company, CompanyLookup, CompanyRecord, RawCik, pad_cik};
pub use filings::{
    DEFAULT_LIMIT, Filing, FilingFilter, FilingFilterBuilder, FilingRecord, MAX_LIMIT, parse_date,
};
pub use query::{FilingQueryEngine, list_filings};
