//! Quote and top-movers gateways.

use super::convert::map_quotes;
use super::wire::PriceMultiFullResponse;
use super::Coin;
use crate::error::GatewayError;
use crate::http::Transport;
use crate::reference::ReferenceTable;
use crate::shared::Ticker;

use std::sync::Arc;

/// Fetches quotes for a batch of tickers in a single request.
#[derive(Clone)]
pub struct QuoteGateway {
    transport: Arc<dyn Transport>,
    base_url: String,
    currency: String,
    reference: Arc<ReferenceTable>,
}

impl QuoteGateway {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: &str,
        currency: &str,
        reference: Arc<ReferenceTable>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            currency: currency.to_string(),
            reference,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn url_for(&self, tickers: &[Ticker]) -> String {
        format!(
            "{}/data/pricemultifull?fsyms={}&tsyms={}&relaxedValidation=true",
            self.base_url,
            urlencoding::encode(&Ticker::join(tickers)),
            urlencoding::encode(&self.currency)
        )
    }

    /// One `Coin` per ticker, in request order. An empty batch returns
    /// immediately without touching the network.
    pub async fn fetch(&self, tickers: &[Ticker]) -> Result<Vec<Coin>, GatewayError> {
        if tickers.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.url_for(tickers);
        let resp = self.transport.get(&url).await?;
        if resp.status != 200 {
            return Err(GatewayError::Status {
                status: resp.status,
                body: resp.body,
            });
        }

        let parsed: PriceMultiFullResponse = serde_json::from_str(&resp.body)?;
        map_quotes(tickers, &self.currency, parsed, &self.reference)
    }
}

/// Ranks a ticker universe by the size of its 24h move.
#[derive(Clone)]
pub struct TopMoversGateway {
    quotes: QuoteGateway,
    universe: Vec<Ticker>,
    limit: usize,
}

impl TopMoversGateway {
    pub fn new(quotes: QuoteGateway, universe: Vec<Ticker>, limit: usize) -> Self {
        Self {
            quotes,
            universe,
            limit,
        }
    }

    pub fn universe(&self) -> &[Ticker] {
        &self.universe
    }

    pub async fn fetch(&self) -> Result<Vec<Coin>, GatewayError> {
        let coins = self.quotes.fetch(&self.universe).await?;
        Ok(rank_movers(coins, self.limit))
    }
}

/// Sort by absolute percent change, largest first, and keep `limit`.
/// Ties keep their universe order.
pub fn rank_movers(mut coins: Vec<Coin>, limit: usize) -> Vec<Coin> {
    coins.sort_by(|a, b| b.percent_change.abs().cmp(&a.percent_change.abs()));
    coins.truncate(limit);
    coins
}
