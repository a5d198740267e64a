//! Load companies and filings from the selected source.

use crate::cli::{SourceArgs, SourceKind};
use edgarq_data::edgar::{
    Company, CompanyLookup, EdgarClient, Filing, FilingFilter, FilingQueryEngine, list_filings,
};
use edgarq_data::{DataError, EdgarConfig, SecClient, fixtures};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Error type for source loading.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SourceError {
    /// Lookup, query or fetch error.
    #[error(transparent)]
    Data(#[from] DataError),
    /// A fixture path the command needs was not given.
    #[error("--{0} is required with --source fixtures")]
    MissingFixture(&'static str),
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg);
    pb
}

fn require_path<'a>(path: Option<&'a Path>, flag: &'static str) -> Result<&'a Path, SourceError> {
    path.ok_or(SourceError::MissingFixture(flag))
}

fn fixture_client(source: &SourceArgs, with_filings: bool) -> Result<SecClient, SourceError> {
    let companies = require_path(source.companies.as_deref(), "companies")?;
    let lookup: CompanyLookup = fixtures::companies_from_path(companies)?;

    let engine = if with_filings {
        let filings = require_path(source.filings.as_deref(), "filings")?;
        FilingQueryEngine::from_filings(fixtures::filings_from_path(filings)?)
    } else {
        FilingQueryEngine::new()
    };
    info!(
        companies = lookup.len(),
        indexed = engine.company_count(),
        "loaded fixtures"
    );

    Ok(SecClient::new(lookup, engine))
}

async fn remote_registry(client: &EdgarClient) -> Result<CompanyLookup, SourceError> {
    let pb = spinner("Fetching ticker registry...");
    let registry = client.fetch_registry().await;
    pb.finish_and_clear();
    Ok(registry?)
}

/// Resolve a ticker from the selected source.
pub(crate) async fn load_company(
    source: &SourceArgs,
    config: EdgarConfig,
    ticker: &str,
) -> Result<Company, SourceError> {
    match source.source {
        SourceKind::Fixtures => Ok(fixture_client(source, false)?.lookup_company(ticker)?),
        SourceKind::Remote => {
            let client = EdgarClient::with_config(config)?;
            let registry = remote_registry(&client).await?;
            Ok(registry.lookup(ticker)?)
        }
    }
}

/// Resolve a ticker and list its filings from the selected source.
pub(crate) async fn load_company_filings(
    source: &SourceArgs,
    config: EdgarConfig,
    ticker: &str,
    filter: &FilingFilter,
) -> Result<(Company, Vec<Filing>), SourceError> {
    match source.source {
        SourceKind::Fixtures => {
            let client = fixture_client(source, true)?;
            let company = client.lookup_company(ticker)?;
            let filings = client.list_filings(company.cik(), filter)?;
            Ok((company, filings))
        }
        SourceKind::Remote => {
            let client = EdgarClient::with_config(config)?;
            let registry = remote_registry(&client).await?;
            let company = registry.lookup(ticker)?;

            let pb = spinner("Fetching filing history...");
            let fetched = client.fetch_filings(company.cik()).await;
            pb.finish_and_clear();

            let filings = list_filings(company.cik(), &fetched?, filter)?;
            Ok((company, filings))
        }
    }
}
