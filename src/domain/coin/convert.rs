//! Conversion: `PriceMultiFullResponse` → `Vec<Coin>`.

use super::wire::PriceMultiFullResponse;
use super::Coin;
use crate::error::GatewayError;
use crate::reference::ReferenceTable;
use crate::shared::Ticker;

/// Map a quote response onto one `Coin` per requested ticker, in request order.
///
/// Fails closed when a requested ticker has no quote in `currency`. A ticker
/// that is missing from `reference` is not an error: it gets the unknown
/// sentinel id and name.
pub fn map_quotes(
    tickers: &[Ticker],
    currency: &str,
    response: PriceMultiFullResponse,
    reference: &ReferenceTable,
) -> Result<Vec<Coin>, GatewayError> {
    if let Some(message) = response.provider_error() {
        return Err(GatewayError::Api(message));
    }
    let raw = response
        .raw
        .ok_or_else(|| GatewayError::Schema("missing RAW section".to_string()))?;

    let mut coins = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let quote = raw
            .get(ticker.as_str())
            .and_then(|by_currency| by_currency.get(currency))
            .ok_or_else(|| {
                GatewayError::Schema(format!("missing quote RAW.{}.{}", ticker, currency))
            })?;

        if let Some(from) = quote.from_symbol.as_deref() {
            if !from.eq_ignore_ascii_case(ticker.as_str()) {
                return Err(GatewayError::Schema(format!(
                    "quote for {} reports FROMSYMBOL {}",
                    ticker, from
                )));
            }
        }

        let (id, name) = reference.resolve(ticker);
        if id == crate::reference::UNKNOWN_ID {
            tracing::warn!(ticker = %ticker, "ticker not in reference dataset, using unknown sentinel");
        }

        coins.push(Coin::new(
            id,
            name,
            ticker.clone(),
            quote.price,
            quote.change_pct_24h,
        ));
    }
    Ok(coins)
}
