//! Render a filing query in every export format.
//!
//! Run with: cargo run --example export_demo

use edgarq_data::SecClient;
use edgarq_data::edgar::FilingFilter;
use edgarq_output::{ExportFormat, Exporter};

const COMPANIES: &str = r#"{
    "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}
}"#;

const FILINGS: &str = r#"{
    "0000320193": [
        {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "2024-11-01", "accession_number": "0000320193-24-000123"},
        {"company_name": "Apple Inc.", "form_type": "10-Q", "filing_date": "2024-08-01", "accession_number": "0000320193-24-000100"},
        {"company_name": "Apple Inc.", "form_type": "8-K", "filing_date": "2024-03-15", "accession_number": "0000320193-24-000050"}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SecClient::from_fixtures(COMPANIES, Some(FILINGS))?;
    let company = client.lookup_company("aapl")?;
    let filter = FilingFilter::builder()
        .form_types(["10-K", "10-Q"])
        .build()?;
    let filings = client.list_filings(company.cik(), &filter)?;

    println!("{}", company.export_to_string(ExportFormat::Table)?);
    for format in [
        ExportFormat::Table,
        ExportFormat::Csv,
        ExportFormat::PrettyJson,
    ] {
        println!("--- {:?} ---", format);
        println!("{}", filings.export_to_string(format)?);
    }

    Ok(())
}
