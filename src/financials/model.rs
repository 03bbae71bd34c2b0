use std::cmp::Ordering;
use std::io;

use serde::Serialize;

use crate::FmpError;

/// Output columns, declared in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    CompanyName,
    Symbol,
    Country,
    Industry,
    Year,
    Revenue,
    Currency,
    GrossProfit,
    OperatingIncome,
    NetIncome,
    EarningsPerShare,
}

impl Column {
    /// Every column in canonical order.
    pub const ALL: [Column; 11] = [
        Column::CompanyName,
        Column::Symbol,
        Column::Country,
        Column::Industry,
        Column::Year,
        Column::Revenue,
        Column::Currency,
        Column::GrossProfit,
        Column::OperatingIncome,
        Column::NetIncome,
        Column::EarningsPerShare,
    ];

    /// Header name in the CSV output.
    pub const fn name(self) -> &'static str {
        match self {
            Column::CompanyName => "company_name",
            Column::Symbol => "symbol",
            Column::Country => "country",
            Column::Industry => "industry",
            Column::Year => "year",
            Column::Revenue => "revenue",
            Column::Currency => "currency",
            Column::GrossProfit => "gross_profit",
            Column::OperatingIncome => "operating_income",
            Column::NetIncome => "net_income",
            Column::EarningsPerShare => "earnings_per_share",
        }
    }

    /// Income-statement field this column is renamed from. `None` for profile columns.
    pub const fn source_field(self) -> Option<&'static str> {
        match self {
            Column::Symbol => Some("symbol"),
            Column::Year => Some("fiscalYear"),
            Column::Revenue => Some("revenue"),
            Column::Currency => Some("reportedCurrency"),
            Column::GrossProfit => Some("grossProfit"),
            Column::OperatingIncome => Some("operatingIncome"),
            Column::NetIncome => Some("netIncome"),
            Column::EarningsPerShare => Some("eps"),
            Column::CompanyName | Column::Country | Column::Industry => None,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One symbol's profile joined with one fiscal year of its income statement.
///
/// `company_name` always has a value (the symbol stands in when the profile lacks a
/// name). Every other field is `None` when the source had no value, and stays `None` for
/// columns the source table did not carry at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyFinancialRow {
    pub company_name: String,
    pub symbol: Option<String>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub year: Option<String>,
    pub revenue: Option<f64>,
    pub currency: Option<String>,
    pub gross_profit: Option<f64>,
    pub operating_income: Option<f64>,
    pub net_income: Option<f64>,
    pub earnings_per_share: Option<f64>,
}

impl CompanyFinancialRow {
    /// The value of `col` rendered for CSV output. `None` is an empty cell.
    pub fn cell(&self, col: Column) -> Option<String> {
        fn num(v: Option<f64>) -> Option<String> {
            v.map(|x| x.to_string())
        }
        match col {
            Column::CompanyName => Some(self.company_name.clone()),
            Column::Symbol => self.symbol.clone(),
            Column::Country => self.country.clone(),
            Column::Industry => self.industry.clone(),
            Column::Year => self.year.clone(),
            Column::Revenue => num(self.revenue),
            Column::Currency => self.currency.clone(),
            Column::GrossProfit => num(self.gross_profit),
            Column::OperatingIncome => num(self.operating_income),
            Column::NetIncome => num(self.net_income),
            Column::EarningsPerShare => num(self.earnings_per_share),
        }
    }
}

/// Rows plus the subset of [`Column`]s they carry, always kept in canonical order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialTable {
    columns: Vec<Column>,
    rows: Vec<CompanyFinancialRow>,
}

impl FinancialTable {
    pub fn new(mut columns: Vec<Column>, rows: Vec<CompanyFinancialRow>) -> Self {
        columns.sort_unstable();
        columns.dedup();
        Self { columns, rows }
    }

    /// Stacks tables in order. The result carries the union of their columns.
    pub fn concat(tables: impl IntoIterator<Item = FinancialTable>) -> Self {
        let mut columns = Vec::new();
        let mut rows = Vec::new();
        for t in tables {
            columns.extend(t.columns);
            rows.extend(t.rows);
        }
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, col: Column) -> bool {
        self.columns.contains(&col)
    }

    pub fn rows(&self) -> &[CompanyFinancialRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<CompanyFinancialRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable sort by symbol ascending; rows without a symbol go last.
    pub fn sort_by_symbol(&mut self) {
        self.rows
            .sort_by(|a, b| none_last(a.symbol.as_deref(), b.symbol.as_deref(), str::cmp));
    }

    /// Stable sort by fiscal year, most recent first; rows without a year go last.
    pub fn sort_by_year_desc(&mut self) {
        self.rows.sort_by(|a, b| {
            none_last(a.year.as_deref(), b.year.as_deref(), |x, y| {
                compare_years(x, y).reverse()
            })
        });
    }

    /// Writes a header row of the present columns followed by one record per row.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Csv`] if the writer fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), FmpError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.columns.iter().map(|c| c.name()))?;
        for row in &self.rows {
            wtr.write_record(
                self.columns
                    .iter()
                    .map(|c| row.cell(*c).unwrap_or_default()),
            )?;
        }
        wtr.flush().map_err(|e| FmpError::Csv(e.into()))?;
        Ok(())
    }
}

fn none_last<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Numeric when both parse ("999" < "1000"), lexicographic otherwise.
fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
