//! Filing records and the filter applied to them.

use super::company::pad_cik;
use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Date format used by EDGAR for filing dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result count used when the caller does not set one.
pub const DEFAULT_LIMIT: usize = 10;

/// Largest accepted result count.
pub const MAX_LIMIT: usize = 1000;

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `DataError::InvalidInput` naming the offending text
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| DataError::invalid(format!("Invalid date '{text}': {e}")))
}

fn require(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DataError::invalid(format!("{field} cannot be empty")));
    }
    Ok(value.to_string())
}

/// A single filing submitted to SEC EDGAR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Filing {
    cik: String,
    company_name: String,
    form_type: String,
    filing_date: NaiveDate,
    accession_number: String,
}

impl Filing {
    /// Create a filing. The CIK is zero-padded to 10 digits.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if any identifier is blank or the
    /// CIK is not numeric
    pub fn new(
        cik: &str,
        company_name: &str,
        form_type: &str,
        filing_date: NaiveDate,
        accession_number: &str,
    ) -> Result<Self> {
        Ok(Self {
            cik: pad_cik(cik)?,
            company_name: require("Company name", company_name)?,
            form_type: require("Form type", form_type)?,
            filing_date,
            accession_number: require("Accession number", accession_number)?,
        })
    }

    /// Create a filing from a textual `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Same as [`Filing::new`], plus malformed dates
    pub fn parse(
        cik: &str,
        company_name: &str,
        form_type: &str,
        filing_date: &str,
        accession_number: &str,
    ) -> Result<Self> {
        Self::new(
            cik,
            company_name,
            form_type,
            parse_date(filing_date)?,
            accession_number,
        )
    }

    /// Zero-padded CIK of the filer
    pub fn cik(&self) -> &str {
        &self.cik
    }

    /// Filer name
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Form type, e.g. "10-K"
    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    /// Date the filing was accepted
    pub const fn filing_date(&self) -> NaiveDate {
        self.filing_date
    }

    /// Unique submission identifier, e.g. "0000320193-24-000123"
    pub fn accession_number(&self) -> &str {
        &self.accession_number
    }

    /// URL of the filing index on SEC EDGAR.
    ///
    /// ```
    /// # use edgarq_data::edgar::Filing;
    /// let filing = Filing::parse(
    ///     "320193",
    ///     "Apple Inc.",
    ///     "10-K",
    ///     "2023-11-03",
    ///     "0000320193-23-000106",
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     filing.index_url(),
    ///     "https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/0000320193-23-000106-index.htm"
    /// );
    /// ```
    pub fn index_url(&self) -> String {
        let cik = self.cik.trim_start_matches('0');
        let accession_no_dashes = self.accession_number.replace('-', "");

        format!(
            "https://www.sec.gov/Archives/edgar/data/{}/{}/{}-index.htm",
            cik, accession_no_dashes, self.accession_number
        )
    }
}

/// Filing entry as stored in a per-company filing index fixture. The CIK
/// comes from the index key.
#[derive(Debug, Clone, Deserialize)]
pub struct FilingRecord {
    /// Filer name
    pub company_name: String,
    /// Form type
    pub form_type: String,
    /// Filing date in YYYY-MM-DD format
    pub filing_date: String,
    /// Accession number
    pub accession_number: String,
}

impl FilingRecord {
    /// Validate this record into a [`Filing`] for the given CIK.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if any field is invalid
    pub fn into_filing(self, cik: &str) -> Result<Filing> {
        Filing::parse(
            cik,
            &self.company_name,
            &self.form_type,
            &self.filing_date,
            &self.accession_number,
        )
    }
}

/// Criteria for selecting filings.
///
/// Every bound is optional; an absent bound accepts everything. Construct
/// with [`FilingFilter::new`] or [`FilingFilter::builder`], which both
/// reject contradictory values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingFilter {
    form_types: Option<BTreeSet<String>>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    limit: usize,
}

impl Default for FilingFilter {
    fn default() -> Self {
        Self {
            form_types: None,
            date_from: None,
            date_to: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FilingFilter {
    /// Create a validated filter.
    ///
    /// An empty `form_types` list is the same as `None`. `limit` is signed so
    /// that caller mistakes are reported rather than wrapped.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` if `limit` is outside
    /// `1..=MAX_LIMIT`, a form type is blank, or `date_from` is after
    /// `date_to`
    pub fn new<I, S>(
        form_types: Option<I>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        limit: i64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let form_types = match form_types {
            Some(types) => {
                let set = types
                    .into_iter()
                    .map(|t| require("Form type", t.as_ref()))
                    .collect::<Result<BTreeSet<_>>>()?;
                (!set.is_empty()).then_some(set)
            }
            None => None,
        };

        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l >= 1)
            .ok_or_else(|| DataError::invalid(format!("Limit must be at least 1, got {limit}")))?;

        let filter = Self {
            form_types,
            date_from,
            date_to,
            limit,
        };
        filter.validate()?;
        Ok(filter)
    }

    /// Start building a filter.
    pub fn builder() -> FilingFilterBuilder {
        FilingFilterBuilder::default()
    }

    /// Accepted form types, `None` when all are accepted
    pub const fn form_types(&self) -> Option<&BTreeSet<String>> {
        self.form_types.as_ref()
    }

    /// Inclusive lower date bound
    pub const fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    /// Inclusive upper date bound
    pub const fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    /// Maximum number of results
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Check the filter's internal consistency.
    ///
    /// # Errors
    /// Returns `DataError::InvalidInput` describing the first problem found
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(DataError::invalid("Limit must be at least 1, got 0"));
        }
        if self.limit > MAX_LIMIT {
            return Err(DataError::invalid(format!(
                "Limit must be at most {MAX_LIMIT}, got {}",
                self.limit
            )));
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to)
            && from > to
        {
            return Err(DataError::invalid(format!(
                "date_from {from} is after date_to {to}"
            )));
        }
        Ok(())
    }

    /// Whether the filing passes the form type and date criteria. The CIK
    /// and limit are applied by the query engine.
    pub fn matches(&self, filing: &Filing) -> bool {
        let form_ok = self
            .form_types
            .as_ref()
            .is_none_or(|types| types.contains(filing.form_type()));
        let from_ok = self.date_from.is_none_or(|from| filing.filing_date() >= from);
        let to_ok = self.date_to.is_none_or(|to| filing.filing_date() <= to);

        form_ok && from_ok && to_ok
    }
}

/// Builder for [`FilingFilter`].
#[derive(Debug, Clone, Default)]
pub struct FilingFilterBuilder {
    form_types: Option<Vec<String>>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    limit: Option<i64>,
}

impl FilingFilterBuilder {
    /// Add an accepted form type.
    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_types
            .get_or_insert_with(Vec::new)
            .push(form_type.into());
        self
    }

    /// Add several accepted form types.
    pub fn form_types<I, S>(mut self, form_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.form_types
            .get_or_insert_with(Vec::new)
            .extend(form_types.into_iter().map(Into::into));
        self
    }

    /// Set the inclusive lower date bound.
    pub const fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Set the inclusive upper date bound.
    pub const fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Set the maximum number of results.
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the filter.
    ///
    /// # Errors
    /// Same as [`FilingFilter::new`]
    pub fn build(self) -> Result<FilingFilter> {
        FilingFilter::new(
            self.form_types,
            self.date_from,
            self.date_to,
            self.limit.unwrap_or(DEFAULT_LIMIT as i64),
        )
    }
}
