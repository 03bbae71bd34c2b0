use crate::core::{FmpClient, FmpError};
use url::Url;

/// Issue a GET and read the response body as text.
///
/// The status code is only logged: FMP reports bad keys and unknown symbols with a JSON
/// body, and callers decide what an empty or error payload means.
pub(crate) async fn get_text(
    client: &FmpClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<String, FmpError> {
    let resp = client.http().get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        tracing::debug!(%status, endpoint, symbol, "non-success status from FMP");
    }
    Ok(resp.text().await?)
}
