//! fmp-financials: company profiles + annual income statements from Financial Modeling Prep,
//! cached on disk and merged into one CSV row per (symbol, fiscal year).
//!
//! The pieces compose linearly:
//! - [`FmpClient`] talks to the API and implements [`FinancialSource`].
//! - [`CachedSource`] puts the per-symbol [`DiskCache`] in front of any source.
//! - [`merge`] joins one profile with its income statements into a [`FinancialTable`].
//! - [`pipeline::run`] drives a symbol list through all of the above and writes the CSV.

pub mod core;
pub mod financials;
pub mod fundamentals;
pub mod pipeline;
pub mod profile;
mod source;

pub use crate::core::services::{DEFAULT_YEARS, FinancialSource};
pub use crate::core::{CacheMode, DiskCache, FmpClient, FmpClientBuilder, FmpError, Resource};
pub use financials::{Column, CompanyFinancialRow, FinancialTable, merge};
pub use fundamentals::{IncomeRow, IncomeStatement};
pub use pipeline::{PipelineConfig, RunSummary};
pub use profile::CompanyProfile;
pub use source::CachedSource;

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
