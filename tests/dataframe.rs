#![cfg(feature = "dataframe")]

use fmp_financials::{CompanyProfile, IncomeStatement, ToDataFrame, merge};

#[test]
fn financial_table_to_dataframe_keeps_present_columns() {
    let p: CompanyProfile = serde_json::from_str(r#"{"companyName":"Alpha Inc"}"#).unwrap();
    let inc: IncomeStatement =
        serde_json::from_str(r#"[{"symbol":"A","fiscalYear":"2024","revenue":10}]"#).unwrap();

    let df = merge("A", &p, &inc).to_dataframe().unwrap();

    assert_eq!(df.height(), 1);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        ["company_name", "symbol", "country", "industry", "year", "revenue"]
    );
}
