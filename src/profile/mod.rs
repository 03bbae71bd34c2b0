//! Company profile type + the remote `profile` call.

mod api;
mod model;

pub use model::CompanyProfile;

use crate::{FmpClient, FmpError};

/// Fetches the profile for `symbol` from the API, bypassing any cache.
///
/// Returns `Ok(None)` (after logging a warning) when the API answers with an empty list,
/// an error object, or a body of the wrong shape.
///
/// # Errors
///
/// Returns `FmpError` if the request fails or the body is not JSON.
pub async fn load_profile(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<CompanyProfile>, FmpError> {
    api::fetch_profile(client, symbol).await
}
