//! Filter, sort and limit filing records.

use super::company::pad_cik;
use super::filings::{Filing, FilingFilter};
use crate::error::{DataError, Result};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

/// Select the filings of one company that pass `filter`, most recent first.
///
/// Filings whose CIK differs from `cik` are ignored. Filings sharing a date
/// keep their input order. Numeric CIKs are zero-padded before matching, so
/// `"320193"` and `"0000320193"` select the same company.
///
/// # Errors
/// Returns `DataError::InvalidInput` for a blank or non-numeric CIK and for
/// a filter that fails [`FilingFilter::validate`]
pub fn list_filings(cik: &str, filings: &[Filing], filter: &FilingFilter) -> Result<Vec<Filing>> {
    let cik = pad_cik(cik)?;
    filter.validate()?;

    let mut selected: Vec<&Filing> = filings
        .iter()
        .filter(|f| f.cik() == cik && filter.matches(f))
        .collect();

    // stable: equal dates stay in input order
    selected.sort_by_key(|f| Reverse(f.filing_date()));
    selected.truncate(filter.limit());

    debug!(
        cik = %cik,
        candidates = filings.len(),
        returned = selected.len(),
        limit = filter.limit(),
        "listed filings"
    );

    Ok(selected.into_iter().cloned().collect())
}

/// Filing index keyed by zero-padded CIK.
#[derive(Debug, Clone, Default)]
pub struct FilingQueryEngine {
    by_cik: HashMap<String, Vec<Filing>>,
}

impl FilingQueryEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine from filings of any number of companies.
    pub fn from_filings<I>(filings: I) -> Self
    where
        I: IntoIterator<Item = Filing>,
    {
        let mut engine = Self::new();
        for filing in filings {
            engine.insert(filing);
        }
        engine
    }

    /// Add a filing to its company's list.
    pub fn insert(&mut self, filing: Filing) {
        self.by_cik
            .entry(filing.cik().to_string())
            .or_default()
            .push(filing);
    }

    /// Whether any filings are indexed for `cik`.
    pub fn contains(&self, cik: &str) -> bool {
        pad_cik(cik).is_ok_and(|cik| self.by_cik.contains_key(&cik))
    }

    /// All indexed filings for `cik` in insertion order.
    pub fn filings(&self, cik: &str) -> Option<&[Filing]> {
        let cik = pad_cik(cik).ok()?;
        self.by_cik.get(&cik).map(Vec::as_slice)
    }

    /// Number of companies with indexed filings.
    pub fn company_count(&self) -> usize {
        self.by_cik.len()
    }

    /// List filings for `cik` that pass `filter`, most recent first.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` for a malformed CIK or filter and
    /// `DataError::NotFound` when no filings are indexed for the CIK
    pub fn list_filings(&self, cik: &str, filter: &FilingFilter) -> Result<Vec<Filing>> {
        let padded = pad_cik(cik)?;
        let filings = self
            .by_cik
            .get(&padded)
            .ok_or_else(|| DataError::NotFound(format!("No filings found for CIK {padded}")))?;

        list_filings(&padded, filings, filter)
    }
}
