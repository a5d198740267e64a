//! Record sources for the CLI.
//!
//! Company and filing records come either from local JSON fixtures or from
//! the live EDGAR endpoints. Either way they are fully loaded before the
//! query runs.

pub(crate) mod loader;

pub(crate) use loader::{load_company, load_company_filings};
