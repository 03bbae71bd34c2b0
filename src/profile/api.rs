//! `profile` endpoint.

use serde_json::Value;

use crate::core::{
    FmpClient, FmpError,
    client::constants::PROFILE_ENDPOINT,
    net,
    wire::{Payload, parse_payload},
};

use super::CompanyProfile;

pub(crate) async fn fetch_profile(
    client: &FmpClient,
    symbol: &str,
) -> Result<Option<CompanyProfile>, FmpError> {
    let url = client.endpoint_url(PROFILE_ENDPOINT, &[("symbol", symbol)])?;
    let body = net::get_text(client, url, PROFILE_ENDPOINT, symbol).await?;

    let reason = match parse_payload(&body)? {
        Payload::Rows(rows) => match rows.into_iter().next() {
            Some(Value::Object(first)) => return Ok(Some(CompanyProfile::new(first))),
            Some(_) => "first element is not an object".to_string(),
            None => "empty result".to_string(),
        },
        Payload::ApiError(msg) => msg,
        Payload::Unexpected(kind) => format!("expected an array, got {kind}"),
    };

    tracing::warn!(symbol, %reason, "Empty or invalid profile");
    Ok(None)
}
