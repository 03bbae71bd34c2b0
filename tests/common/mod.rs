#![allow(dead_code)]

use fmp_financials::FmpClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{symbol}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/stable/", server.base_url())).unwrap()
}

pub fn client(server: &MockServer) -> FmpClient {
    FmpClient::builder()
        .base_url(base_url(server))
        .api_key(API_KEY)
        .build()
        .unwrap()
}

pub fn mock_profile<'a>(server: &'a MockServer, symbol: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/stable/profile")
            .query_param("symbol", symbol)
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_income<'a>(server: &'a MockServer, symbol: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/stable/income-statement")
            .query_param("symbol", symbol)
            .query_param("period", "annual")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Two fiscal years for a made-up symbol, oldest first so sorting is observable.
pub fn income_body(symbol: &str) -> String {
    format!(
        r#"[
            {{"symbol":"{symbol}","fiscalYear":"2023","reportedCurrency":"USD","revenue":1000,"grossProfit":600,"operatingIncome":300,"netIncome":200,"eps":1.5}},
            {{"symbol":"{symbol}","fiscalYear":"2024","reportedCurrency":"USD","revenue":1200,"grossProfit":700,"operatingIncome":350,"netIncome":250,"eps":1.75}}
        ]"#
    )
}
