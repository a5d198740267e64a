//! Fixed-width text tables.

use edgarq_data::edgar::{Company, Filing};

const WIDTH: usize = 60;

/// Render filings as a table, one row per filing in the given order.
pub fn filings_table(filings: &[Filing]) -> String {
    let mut output = String::new();

    match filings.first() {
        Some(first) => output.push_str(&format!(
            "\nFilings: {} (CIK {})\n",
            first.company_name(),
            first.cik()
        )),
        None => output.push_str("\nFilings\n"),
    }
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "{:<12} {:<12} {:<24}\n",
        "Filed", "Form", "Accession Number"
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    for filing in filings {
        output.push_str(&format!(
            "{:<12} {:<12} {:<24}\n",
            filing.filing_date().to_string(),
            filing.form_type(),
            filing.accession_number()
        ));
    }

    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    if filings.is_empty() {
        output.push_str("No filings matched\n");
    } else {
        output.push_str(&format!("{} filing(s)\n", filings.len()));
    }

    output
}

/// Render a company as label/value lines.
pub fn company_table(company: &Company) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", company.name()));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<10} {}\n", "Ticker", company.ticker()));
    output.push_str(&format!("{:<10} {}\n", "CIK", company.cik()));

    output
}
