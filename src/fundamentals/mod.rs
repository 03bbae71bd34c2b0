mod api;
mod model;

pub use model::{IncomeRow, IncomeStatement};

use crate::{FmpClient, FmpError};

/// Fetches the last `years` annual income statements for `symbol` from the API.
///
/// Returns `Ok(None)` (after logging a warning) when the API has no rows for the symbol.
///
/// # Errors
///
/// Returns `FmpError` if the request fails, the body is not JSON, or the body is not a
/// table of objects.
pub async fn income_statement(
    client: &FmpClient,
    symbol: &str,
    years: u32,
) -> Result<Option<IncomeStatement>, FmpError> {
    api::income_statement(client, symbol, years).await
}
