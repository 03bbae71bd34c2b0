use crate::core::{
    FmpClient, FmpError,
    client::constants::INCOME_STATEMENT_ENDPOINT,
    net,
    wire::{Payload, parse_payload},
};

use super::IncomeStatement;

pub(super) async fn income_statement(
    client: &FmpClient,
    symbol: &str,
    years: u32,
) -> Result<Option<IncomeStatement>, FmpError> {
    let limit = years.to_string();
    let url = client.endpoint_url(
        INCOME_STATEMENT_ENDPOINT,
        &[("symbol", symbol), ("period", "annual"), ("limit", &limit)],
    )?;
    let body = net::get_text(client, url, INCOME_STATEMENT_ENDPOINT, symbol).await?;

    let rows = match parse_payload(&body)? {
        Payload::Rows(rows) => rows,
        Payload::ApiError(msg) => {
            tracing::warn!(symbol, reason = %msg, "Empty or invalid income statement");
            return Ok(None);
        }
        Payload::Unexpected(kind) => {
            return Err(FmpError::Data(format!(
                "income statement for {symbol}: expected an array, got {kind}"
            )));
        }
    };

    let table = IncomeStatement::from_values(rows)?;
    if table.is_empty() {
        tracing::warn!(symbol, "Empty or invalid income statement");
        return Ok(None);
    }
    Ok(Some(table))
}
