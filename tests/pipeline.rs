mod common;

use std::collections::HashMap;
use std::sync::Mutex;

use fmp_financials::pipeline::{self, parse_symbols};
use fmp_financials::{
    CachedSource, CompanyProfile, FinancialSource, FmpError, IncomeStatement, PipelineConfig,
};

/* ---------------- symbol list ---------------- */

#[test]
fn symbols_are_deduplicated_first_seen_wins() {
    assert_eq!(parse_symbols("AAPL,MSFT,AAPL"), ["AAPL", "MSFT"]);
    assert_eq!(
        parse_symbols(" NVDA , AMD,NVDA,,INTC\n"),
        ["NVDA", "AMD", "INTC"]
    );
    assert!(parse_symbols("").is_empty());
}

/* ---------------- in-memory source ---------------- */

#[derive(Default)]
struct FakeSource {
    profiles: HashMap<String, CompanyProfile>,
    incomes: HashMap<String, IncomeStatement>,
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn with(mut self, symbol: &str, profile: Option<&str>, income: Option<&str>) -> Self {
        if let Some(p) = profile {
            self.profiles
                .insert(symbol.into(), serde_json::from_str(p).unwrap());
        }
        if let Some(i) = income {
            self.incomes
                .insert(symbol.into(), serde_json::from_str(i).unwrap());
        }
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FinancialSource for FakeSource {
    async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, FmpError> {
        self.calls.lock().unwrap().push(format!("profile:{symbol}"));
        if self.fail_on.as_deref() == Some(symbol) {
            return Err(FmpError::Data("boom".into()));
        }
        Ok(self.profiles.get(symbol).cloned())
    }

    async fn income_statement(
        &self,
        symbol: &str,
        years: u32,
    ) -> Result<Option<IncomeStatement>, FmpError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("income:{symbol}:{years}"));
        Ok(self.incomes.get(symbol).cloned())
    }
}

const ALPHA: &str = r#"{"companyName":"Alpha Inc","country":"US","industry":"Tech"}"#;

fn config_in(dir: &std::path::Path, symbols: &str) -> PipelineConfig {
    let symbols_path = dir.join("valid_symbols.txt");
    std::fs::write(&symbols_path, symbols).unwrap();
    PipelineConfig {
        symbols_path,
        cache_dir: dir.join("raw"),
        output_path: dir.join("processed").join("company_financials.csv"),
        ..PipelineConfig::default()
    }
}

#[tokio::test]
async fn collect_processes_each_symbol_once_in_order() {
    let body = common::income_body("AAA");
    let source = FakeSource::default()
        .with("AAA", Some(ALPHA), Some(&body))
        .with("CCC", Some(ALPHA), Some(&common::income_body("CCC")));

    let symbols = parse_symbols("CCC,AAA,CCC");
    let (table, skipped) = pipeline::collect(&source, &symbols, 3).await.unwrap();

    assert!(skipped.is_empty());
    assert_eq!(
        source.calls(),
        ["profile:CCC", "income:CCC:3", "profile:AAA", "income:AAA:3"]
    );
    let syms: Vec<_> = table
        .rows()
        .iter()
        .map(|r| r.symbol.clone().unwrap())
        .collect();
    assert_eq!(syms, ["AAA", "AAA", "CCC", "CCC"]);
}

#[tokio::test]
async fn symbol_missing_either_part_contributes_no_rows() {
    let source = FakeSource::default()
        .with("AAA", Some(ALPHA), Some(&common::income_body("AAA")))
        .with("NOINC", Some(ALPHA), None)
        .with("NOPRO", None, Some(&common::income_body("NOPRO")));

    let symbols = parse_symbols("NOINC,AAA,NOPRO");
    let (table, skipped) = pipeline::collect(&source, &symbols, 3).await.unwrap();

    assert_eq!(skipped, ["NOINC", "NOPRO"]);
    assert_eq!(table.len(), 2);
    assert!(
        table
            .rows()
            .iter()
            .all(|r| r.symbol.as_deref() == Some("AAA"))
    );
    // both parts are requested even when the profile is missing
    assert!(source.calls().contains(&"income:NOPRO:3".to_string()));
}

#[tokio::test]
async fn source_error_aborts_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "AAA,BAD");
    let source = FakeSource {
        fail_on: Some("BAD".into()),
        ..FakeSource::default()
    }
    .with("AAA", Some(ALPHA), Some(&common::income_body("AAA")));

    let err = pipeline::run(&source, &config).await.unwrap_err();

    assert!(matches!(err, FmpError::Data(_)));
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn no_rows_collected_is_fatal_and_keeps_previous_output() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "XXX,YYY");
    std::fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
    std::fs::write(&config.output_path, "previous run\n").unwrap();

    let source = FakeSource::default();
    let err = pipeline::run(&source, &config).await.unwrap_err();

    assert!(matches!(err, FmpError::NoData));
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "previous run\n"
    );
}

#[tokio::test]
async fn missing_symbols_file_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        symbols_path: tmp.path().join("absent.txt"),
        ..PipelineConfig::default()
    };

    let err = pipeline::run(&FakeSource::default(), &config)
        .await
        .unwrap_err();
    assert!(matches!(err, FmpError::Io { .. }));
}

/* ---------------- end to end over HTTP ---------------- */

#[tokio::test]
async fn end_to_end_skips_symbol_with_empty_profile() {
    let server = common::setup_server();
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "AAA,BBB");

    let aaa_profile =
        common::mock_profile(&server, "AAA", format!("[{ALPHA}]"));
    let aaa_income = common::mock_income(&server, "AAA", common::income_body("AAA"));
    let bbb_profile = common::mock_profile(&server, "BBB", "[]".into());
    let bbb_income = common::mock_income(&server, "BBB", common::income_body("BBB"));

    let source = CachedSource::new(common::client(&server), config.disk_cache());
    let summary = pipeline::run(&source, &config).await.unwrap();

    aaa_profile.assert();
    aaa_income.assert();
    bbb_profile.assert();
    bbb_income.assert();

    assert_eq!(summary.processed, ["AAA"]);
    assert_eq!(summary.skipped, ["BBB"]);
    assert_eq!(summary.rows_written, 2);

    let csv = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(
        csv,
        "company_name,symbol,country,industry,year,revenue,currency,gross_profit,operating_income,net_income,earnings_per_share\n\
         Alpha Inc,AAA,US,Tech,2024,1200,USD,700,350,250,1.75\n\
         Alpha Inc,AAA,US,Tech,2023,1000,USD,600,300,200,1.5\n"
    );

    // AAA is cached, BBB's empty profile is not
    assert!(config.cache_dir.join("profile_AAA.json").exists());
    assert!(config.cache_dir.join("income_AAA.json").exists());
    assert!(!config.cache_dir.join("profile_BBB.json").exists());

    // A second run is served from cache for AAA.
    pipeline::run(&source, &config).await.unwrap();
    aaa_profile.assert_calls(1);
    aaa_income.assert_calls(1);
    bbb_profile.assert_calls(2);
}

#[tokio::test]
async fn empty_cached_income_statement_skips_symbol() {
    let server = common::setup_server();
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "AAA,BBB");

    let _aaa_profile = common::mock_profile(&server, "AAA", format!("[{ALPHA}]"));
    let _aaa_income = common::mock_income(&server, "AAA", common::income_body("AAA"));
    let _bbb_profile = common::mock_profile(&server, "BBB", format!("[{ALPHA}]"));
    let bbb_income = common::mock_income(&server, "BBB", common::income_body("BBB"));

    let cache = config.disk_cache();
    cache.ensure_dir().await.unwrap();
    std::fs::write(
        cache.path_for(fmp_financials::Resource::IncomeStatement, "BBB"),
        "[]",
    )
    .unwrap();

    let source = CachedSource::new(common::client(&server), cache);
    let summary = pipeline::run(&source, &config).await.unwrap();

    bbb_income.assert_calls(0);
    assert_eq!(summary.processed, ["AAA"]);
    assert_eq!(summary.skipped, ["BBB"]);
    assert_eq!(summary.rows_written, 2);
}

#[tokio::test]
async fn end_to_end_all_symbols_fail() {
    let server = common::setup_server();
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path(), "AAA,BBB");

    let _profiles = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/stable/profile");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let _incomes = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/stable/income-statement");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let source = CachedSource::new(common::client(&server), config.disk_cache());
    let err = pipeline::run(&source, &config).await.unwrap_err();

    assert!(matches!(err, FmpError::NoData));
    assert!(!config.output_path.exists());
}
