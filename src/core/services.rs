use std::future::Future;

use crate::core::{FmpClient, FmpError};
use crate::fundamentals::{self, IncomeStatement};
use crate::profile::{self, CompanyProfile};

/// Number of annual statements requested when the caller does not say otherwise.
pub const DEFAULT_YEARS: u32 = 3;

/// A source of company profiles and annual income statements.
///
/// This is the seam between the pipeline and where the data comes from. It is implemented
/// by [`FmpClient`] (network only) and by [`CachedSource`](crate::CachedSource), which puts
/// the disk cache in front of any other source. Tests substitute their own implementation.
///
/// Both methods return `Ok(None)` for "no usable data for this symbol" and reserve `Err`
/// for failures that should stop the run.
pub trait FinancialSource {
    /// Fetch the profile for `symbol`.
    fn profile(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Option<CompanyProfile>, FmpError>> + Send;

    /// Fetch the last `years` annual income statements for `symbol`.
    fn income_statement(
        &self,
        symbol: &str,
        years: u32,
    ) -> impl Future<Output = Result<Option<IncomeStatement>, FmpError>> + Send;
}

pub(crate) fn check_symbol(symbol: &str) -> Result<(), FmpError> {
    if symbol.trim().is_empty() {
        return Err(FmpError::InvalidParams("symbol must not be empty".into()));
    }
    Ok(())
}

pub(crate) fn check_years(years: u32) -> Result<(), FmpError> {
    if years == 0 {
        return Err(FmpError::InvalidParams("years must be at least 1".into()));
    }
    Ok(())
}

impl FinancialSource for FmpClient {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, FmpError> {
        check_symbol(symbol)?;
        profile::load_profile(self, symbol).await
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn income_statement(
        &self,
        symbol: &str,
        years: u32,
    ) -> Result<Option<IncomeStatement>, FmpError> {
        check_symbol(symbol)?;
        check_years(years)?;
        fundamentals::income_statement(self, symbol, years).await
    }
}
