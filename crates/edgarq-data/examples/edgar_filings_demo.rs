//! Demo of SEC EDGAR company lookup and filing queries.
//!
//! This example demonstrates how to:
//! - Look up a company's CIK from its ticker symbol
//! - Fetch the company's filing history
//! - List the latest annual and quarterly reports
//!
//! Run with: cargo run --example edgar_filings_demo

use edgarq_data::edgar::{EdgarClient, FilingFilter, list_filings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EdgarClient::new()?;

    println!("Fetching ticker registry from SEC...");
    let registry = client.fetch_registry().await?;

    let company = registry.lookup("AAPL")?;
    println!("\n{}", company);

    println!("\nFetching filing history...");
    let filings = client.fetch_filings(company.cik()).await?;
    println!("  {} recent filings", filings.len());

    for form in ["10-K", "10-Q"] {
        let filter = FilingFilter::builder().form_type(form).limit(3).build()?;
        let latest = list_filings(company.cik(), &filings, &filter)?;

        println!("\nLatest {}:", form);
        for filing in &latest {
            println!("  {} - {}", filing.filing_date(), filing.accession_number());
            println!("    {}", filing.index_url());
        }
    }

    Ok(())
}
