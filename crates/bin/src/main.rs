//! edgarq CLI binary.
//!
//! Provides command-line access to company lookups and filing queries.

mod cli;
mod source;

use clap::Parser;
use cli::{Cli, Commands, OutputArgs};
use edgarq_data::EdgarConfig;
use edgarq_data::edgar::FilingFilter;
use edgarq_output::Exporter;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.trace {
        Some(level) => EnvFilter::new(level.as_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EdgarConfig::from_json_file(path)?,
        None => EdgarConfig::default(),
    };
    debug!(?config, "edgar settings");

    match cli.command {
        Commands::Lookup {
            ticker,
            source,
            output,
        } => {
            let company = source::load_company(&source, config, &ticker).await?;
            emit(&company, &output)?;
        }
        Commands::Filings {
            ticker,
            forms,
            from,
            to,
            limit,
            source,
            output,
        } => {
            let forms = (!forms.is_empty()).then_some(forms);
            let filter = FilingFilter::new(forms, from, to, limit)?;
            let (company, filings) =
                source::load_company_filings(&source, config, &ticker, &filter).await?;
            debug!(ticker = company.ticker(), count = filings.len(), "query done");
            emit(filings.as_slice(), &output)?;
        }
    }

    Ok(())
}

fn emit<T>(value: &T, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>>
where
    T: Exporter + ?Sized,
{
    match &output.output {
        Some(path) => {
            value.export_to_file(path, output.format)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", value.export_to_string(output.format)?),
    }
    Ok(())
}
