//! Loading registry snapshots and filing indexes from JSON.
//!
//! Two shapes are understood:
//!
//! - the SEC ticker registry, `{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}`
//! - a filing index keyed by CIK, `{"0000320193": [{"company_name": ..., "form_type": ...,
//!   "filing_date": "2024-11-01", "accession_number": ...}]}`

use crate::edgar::{CompanyLookup, CompanyRecord, Filing, FilingQueryEngine, FilingRecord};
use crate::error::{DataError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Parse a ticker registry.
///
/// # Errors
/// Returns `DataError::Serialization` for malformed JSON and
/// `DataError::InvalidInput` for an unusable entry
pub fn companies_from_str(json: &str) -> Result<CompanyLookup> {
    let data: HashMap<String, CompanyRecord> = serde_json::from_str(json)?;
    let lookup = CompanyLookup::from_records(data.into_values())?;
    debug!(companies = lookup.len(), "loaded ticker registry");
    Ok(lookup)
}

/// Read a ticker registry from a file.
///
/// # Errors
/// Same as [`companies_from_str`], plus IO errors
pub fn companies_from_path(path: &Path) -> Result<CompanyLookup> {
    companies_from_str(&std::fs::read_to_string(path)?)
}

/// Parse a filing index into validated filings.
///
/// Filings keep their order within each company.
///
/// # Errors
/// Returns `DataError::Serialization` for malformed JSON and
/// `DataError::InvalidInput` naming the CIK and entry that failed validation
pub fn filings_from_str(json: &str) -> Result<Vec<Filing>> {
    let data: HashMap<String, Vec<FilingRecord>> = serde_json::from_str(json)?;

    let mut filings = Vec::new();
    for (cik, records) in data {
        for (i, record) in records.into_iter().enumerate() {
            let filing = record.into_filing(&cik).map_err(|e| {
                DataError::invalid(format!("Filing index entry {cik}[{i}]: {e}"))
            })?;
            filings.push(filing);
        }
    }
    debug!(filings = filings.len(), "loaded filing index");
    Ok(filings)
}

/// Read a filing index from a file.
///
/// # Errors
/// Same as [`filings_from_str`], plus IO errors
pub fn filings_from_path(path: &Path) -> Result<Vec<Filing>> {
    filings_from_str(&std::fs::read_to_string(path)?)
}

/// Parse a filing index straight into a query engine.
///
/// # Errors
/// Same as [`filings_from_str`]
pub fn engine_from_str(json: &str) -> Result<FilingQueryEngine> {
    Ok(FilingQueryEngine::from_filings(filings_from_str(json)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPANIES: &str = r#"{
        "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
        "1": {"cik_str": 789019, "ticker": "MSFT", "title": "Microsoft Corp"}
    }"#;

    const FILINGS: &str = r#"{
        "0000320193": [
            {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "2024-11-01", "accession_number": "0000320193-24-000123"},
            {"company_name": "Apple Inc.", "form_type": "10-Q", "filing_date": "2024-08-01", "accession_number": "0000320193-24-000100"}
        ],
        "789019": [
            {"company_name": "Microsoft Corp", "form_type": "10-K", "filing_date": "2024-07-30", "accession_number": "0000789019-24-000100"}
        ]
    }"#;

    #[test]
    fn test_companies_from_str() {
        let lookup = companies_from_str(COMPANIES).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.lookup("msft").unwrap().cik(), "0000789019");
    }

    #[test]
    fn test_filings_from_str_pads_keys() {
        let filings = filings_from_str(FILINGS).unwrap();
        assert_eq!(filings.len(), 3);
        assert!(filings.iter().any(|f| f.cik() == "0000789019"));
    }

    #[test]
    fn test_bad_entry_names_location() {
        let json = r#"{"0000320193": [
            {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "01/11/2024", "accession_number": "x"}
        ]}"#;
        let err = filings_from_str(json).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("0000320193[0]"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            companies_from_str("[1, 2"),
            Err(DataError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let companies = dir.path().join("companies.json");
        let filings = dir.path().join("filings.json");
        std::fs::write(&companies, COMPANIES).unwrap();
        std::fs::write(&filings, FILINGS).unwrap();

        assert_eq!(companies_from_path(&companies).unwrap().len(), 2);
        assert_eq!(filings_from_path(&filings).unwrap().len(), 3);
        assert!(matches!(
            filings_from_path(&dir.path().join("missing.json")),
            Err(DataError::Io(_))
        ));
    }

    #[test]
    fn test_engine_from_str() {
        let engine = engine_from_str(FILINGS).unwrap();
        assert_eq!(engine.company_count(), 2);
    }
}
