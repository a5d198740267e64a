//! Integration tests for company lookup and filing queries.

use chrono::NaiveDate;
use edgarq_data::edgar::{Filing, FilingFilter, list_filings};
use edgarq_data::{DataError, SecClient};
use rstest::{fixture, rstest};

const APPLE: &str = "0000320193";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[fixture]
fn companies_json() -> &'static str {
    r#"{
        "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
        "1": {"cik_str": 789019, "ticker": "MSFT", "title": "Microsoft Corp"},
        "2": {"cik_str": 1318605, "ticker": "TSLA", "title": "Tesla Inc"}
    }"#
}

#[fixture]
fn filings_json() -> &'static str {
    r#"{
        "0000320193": [
            {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "2024-11-01", "accession_number": "0000320193-24-000123"},
            {"company_name": "Apple Inc.", "form_type": "10-Q", "filing_date": "2024-08-01", "accession_number": "0000320193-24-000100"},
            {"company_name": "Apple Inc.", "form_type": "10-Q", "filing_date": "2024-05-01", "accession_number": "0000320193-24-000075"},
            {"company_name": "Apple Inc.", "form_type": "8-K", "filing_date": "2024-03-15", "accession_number": "0000320193-24-000050"},
            {"company_name": "Apple Inc.", "form_type": "10-K", "filing_date": "2023-11-02", "accession_number": "0000320193-23-000123"}
        ],
        "0000789019": [
            {"company_name": "Microsoft Corp", "form_type": "10-K", "filing_date": "2024-07-30", "accession_number": "0000789019-24-000100"}
        ]
    }"#
}

#[fixture]
fn client(companies_json: &'static str, filings_json: &'static str) -> SecClient {
    SecClient::from_fixtures(companies_json, Some(filings_json)).unwrap()
}

fn assert_invariants(filings: &[Filing], filter: &FilingFilter, cik: &str) {
    assert!(filings.len() <= filter.limit());
    assert!(
        filings
            .windows(2)
            .all(|w| w[0].filing_date() >= w[1].filing_date())
    );
    for filing in filings {
        assert_eq!(filing.cik(), cik);
        assert!(filter.matches(filing));
    }
}

#[rstest]
fn test_lookup_company(client: SecClient) {
    let company = client.lookup_company("AAPL").unwrap();
    assert_eq!(company.ticker(), "AAPL");
    assert_eq!(company.cik(), APPLE);
    assert_eq!(company.name(), "Apple Inc.");
}

#[rstest]
#[case("aapl")]
#[case(" Aapl ")]
fn test_lookup_case_insensitive(client: SecClient, #[case] ticker: &str) {
    assert_eq!(client.lookup_company(ticker).unwrap().ticker(), "AAPL");
}

#[rstest]
fn test_lookup_unknown_ticker(client: SecClient) {
    let err = client.lookup_company("INVALID").unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));
}

#[rstest]
fn test_no_filters_returns_all_sorted(client: SecClient) {
    let filter = FilingFilter::default();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), 5);
    assert_eq!(filings[0].filing_date(), date(2024, 11, 1));
    assert_eq!(filings[4].filing_date(), date(2023, 11, 2));
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
#[case(&["10-K"], 2)]
#[case(&["10-K", "10-Q"], 4)]
#[case(&["8-K"], 1)]
#[case(&["S-1"], 0)]
fn test_form_type_filter(client: SecClient, #[case] forms: &[&str], #[case] expected: usize) {
    let filter = FilingFilter::builder()
        .form_types(forms.iter().copied())
        .build()
        .unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), expected);
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
fn test_date_from(client: SecClient) {
    let filter = FilingFilter::builder()
        .date_from(date(2024, 5, 1))
        .build()
        .unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), 3);
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
fn test_date_to(client: SecClient) {
    let filter = FilingFilter::builder()
        .date_to(date(2024, 6, 1))
        .build()
        .unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), 3);
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
fn test_date_range(client: SecClient) {
    let filter = FilingFilter::builder()
        .date_from(date(2024, 3, 1))
        .date_to(date(2024, 8, 31))
        .build()
        .unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), 3);
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(1000)]
fn test_limit_respected(client: SecClient, #[case] limit: i64) {
    let filter = FilingFilter::builder().limit(limit).build().unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), (limit as usize).min(5));
    assert_invariants(&filings, &filter, APPLE);
}

#[rstest]
fn test_combined_filters(client: SecClient) {
    let filter = FilingFilter::builder()
        .form_type("10-Q")
        .date_from(date(2024, 1, 1))
        .limit(1)
        .build()
        .unwrap();
    let filings = client.list_filings(APPLE, &filter).unwrap();

    assert_eq!(filings.len(), 1);
    assert_eq!(filings[0].form_type(), "10-Q");
    assert_eq!(filings[0].filing_date(), date(2024, 8, 1));
}

#[rstest]
fn test_unknown_cik(client: SecClient) {
    let err = client
        .list_filings("9999999999", &FilingFilter::default())
        .unwrap_err();
    assert!(err.to_string().contains("No filings found"));
}

#[rstest]
fn test_empty_cik(client: SecClient) {
    let err = client
        .list_filings("", &FilingFilter::default())
        .unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
}

#[rstest]
fn test_client_without_filings(companies_json: &'static str) {
    let client = SecClient::from_fixtures(companies_json, None).unwrap();
    let company = client.lookup_company("AAPL").unwrap();

    let err = client
        .list_filings(company.cik(), &FilingFilter::default())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[rstest]
fn test_company_filings_by_ticker(client: SecClient) {
    let filter = FilingFilter::builder().form_type("10-K").build().unwrap();
    let filings = client.company_filings("msft", &filter).unwrap();

    assert_eq!(filings.len(), 1);
    assert_eq!(filings[0].company_name(), "Microsoft Corp");
}

#[test]
fn test_worked_examples() {
    let filings = vec![
        Filing::new(APPLE, "Apple Inc.", "10-K", date(2023, 1, 1), "k-2023").unwrap(),
        Filing::new(APPLE, "Apple Inc.", "10-K", date(2022, 1, 1), "k-2022").unwrap(),
        Filing::new(APPLE, "Apple Inc.", "10-K", date(2021, 1, 1), "k-2021").unwrap(),
        Filing::new(APPLE, "Apple Inc.", "10-Q", date(2023, 6, 1), "q-2023").unwrap(),
    ];

    let annual = FilingFilter::builder()
        .form_type("10-K")
        .limit(2)
        .build()
        .unwrap();
    let result = list_filings(APPLE, &filings, &annual).unwrap();
    let dates: Vec<_> = result.iter().map(Filing::filing_date).collect();
    assert_eq!(dates, vec![date(2023, 1, 1), date(2022, 1, 1)]);

    let window = FilingFilter::builder()
        .date_from(date(2022, 6, 1))
        .date_to(date(2023, 12, 31))
        .build()
        .unwrap();
    let result = list_filings(APPLE, &filings, &window).unwrap();
    let got: Vec<_> = result
        .iter()
        .map(|f| (f.filing_date(), f.form_type()))
        .collect();
    assert_eq!(
        got,
        vec![(date(2023, 6, 1), "10-Q"), (date(2023, 1, 1), "10-K")]
    );

    let err = FilingFilter::builder().limit(0).build().unwrap_err();
    assert!(err.is_invalid_input());
}
