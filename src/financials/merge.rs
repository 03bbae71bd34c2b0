use serde_json::Value;

use crate::fundamentals::{IncomeRow, IncomeStatement};
use crate::profile::CompanyProfile;

use super::{Column, CompanyFinancialRow, FinancialTable};

/// Joins a profile with its income statements, one output row per statement row.
///
/// Income-statement fields are renamed to their [`Column`] names. Fields the table does not
/// carry are dropped from the output (one warning lists them). The profile columns are
/// always present: `company_name` falls back to `symbol`, `country` and `industry` to
/// `None`. Rows are ordered by fiscal year, most recent first.
pub fn merge(
    symbol: &str,
    profile: &CompanyProfile,
    income: &IncomeStatement,
) -> FinancialTable {
    let missing: Vec<&str> = Column::ALL
        .iter()
        .filter_map(|c| c.source_field())
        .filter(|f| !income.has_column(f))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(symbol, ?missing, "Missing expected columns");
    }

    let columns: Vec<Column> = Column::ALL
        .into_iter()
        .filter(|c| c.source_field().is_none_or(|f| income.has_column(f)))
        .collect();

    let company_name = profile
        .company_name()
        .unwrap_or_else(|| symbol.to_string());
    let country = profile.country();
    let industry = profile.industry();

    let rows = income
        .rows()
        .iter()
        .map(|r| CompanyFinancialRow {
            company_name: company_name.clone(),
            symbol: text(r, Column::Symbol),
            country: country.clone(),
            industry: industry.clone(),
            year: text(r, Column::Year),
            revenue: number(r, Column::Revenue),
            currency: text(r, Column::Currency),
            gross_profit: number(r, Column::GrossProfit),
            operating_income: number(r, Column::OperatingIncome),
            net_income: number(r, Column::NetIncome),
            earnings_per_share: number(r, Column::EarningsPerShare),
        })
        .collect();

    let mut table = FinancialTable::new(columns, rows);
    if table.has_column(Column::Year) {
        table.sort_by_year_desc();
    }
    table
}

fn field(row: &IncomeRow, col: Column) -> Option<&Value> {
    col.source_field()
        .and_then(|f| row.get(f))
        .filter(|v| !v.is_null())
}

fn text(row: &IncomeRow, col: Column) -> Option<String> {
    field(row, col).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn number(row: &IncomeRow, col: Column) -> Option<f64> {
    match field(row, col)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
