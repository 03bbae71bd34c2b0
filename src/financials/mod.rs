//! Merged profile + income-statement output table.

mod merge;
mod model;

pub use merge::merge;
pub use model::{Column, CompanyFinancialRow, FinancialTable};
