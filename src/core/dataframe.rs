use polars::prelude::*;

use crate::financials::{Column as OutColumn, FinancialTable};

/// Trait for converting output tables into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for FinancialTable {
    /// Only the columns present in the table are emitted, in canonical order. Numeric
    /// columns are `Float64`, the rest `String`; absent values become nulls.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let rows = self.rows();
        let columns = self
            .columns()
            .iter()
            .map(|&col| {
                let name = PlSmallStr::from_static(col.name());
                let series = match col {
                    OutColumn::Revenue => {
                        Series::new(name, rows.iter().map(|r| r.revenue).collect::<Vec<_>>())
                    }
                    OutColumn::GrossProfit => Series::new(
                        name,
                        rows.iter().map(|r| r.gross_profit).collect::<Vec<_>>(),
                    ),
                    OutColumn::OperatingIncome => Series::new(
                        name,
                        rows.iter().map(|r| r.operating_income).collect::<Vec<_>>(),
                    ),
                    OutColumn::NetIncome => Series::new(
                        name,
                        rows.iter().map(|r| r.net_income).collect::<Vec<_>>(),
                    ),
                    OutColumn::EarningsPerShare => Series::new(
                        name,
                        rows.iter()
                            .map(|r| r.earnings_per_share)
                            .collect::<Vec<_>>(),
                    ),
                    text => Series::new(
                        name,
                        rows.iter().map(|r| r.cell(text)).collect::<Vec<_>>(),
                    ),
                };
                series.into_column()
            })
            .collect::<Vec<_>>();
        DataFrame::new(columns)
    }
}
