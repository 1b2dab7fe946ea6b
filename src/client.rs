//! High-level client: `CoinwatchClient` with nested per-slice sub-clients.
//!
//! Each partition has its own sub-client in `slices/<name>.rs`.
//! This module keeps the builder, the shared store, and accessor methods.

use crate::domain::coin::{QuoteGateway, TopMoversGateway};
use crate::domain::news::NewsGateway;
use crate::error::CoinwatchError;
use crate::http::Transport;
use crate::network;
use crate::reference::ReferenceTable;
use crate::shared::Ticker;
use crate::slices::news::News;
use crate::slices::top_movers::TopMovers;
use crate::slices::watchlist::Watchlist;
use crate::state::{ActionLogger, AppState, ListenerId, Middleware, RequestId, Store};

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::slices::news::News as NewsClient;
pub use crate::slices::top_movers::TopMovers as TopMoversClient;
pub use crate::slices::watchlist::Watchlist as WatchlistClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors for each partition:
/// `client.watchlist()`, `client.news()`, `client.top_movers()`.
/// Clones share the same store and gateways.
#[derive(Clone)]
pub struct CoinwatchClient {
    pub(crate) store: Arc<Store>,
    pub(crate) quotes: QuoteGateway,
    pub(crate) top_movers: TopMoversGateway,
    pub(crate) news: NewsGateway,
    pub(crate) watchlist_tickers: Vec<Ticker>,
    request_seq: Arc<AtomicU64>,
}

impl CoinwatchClient {
    pub fn builder() -> CoinwatchClientBuilder {
        CoinwatchClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn news(&self) -> News<'_> {
        News { client: self }
    }

    pub fn top_movers(&self) -> TopMovers<'_> {
        TopMovers { client: self }
    }

    pub fn watchlist(&self) -> Watchlist<'_> {
        Watchlist { client: self }
    }

    // ── Store access ─────────────────────────────────────────────────────

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub async fn snapshot(&self) -> Arc<AppState> {
        self.store.snapshot().await
    }

    pub async fn subscribe(
        &self,
        listener: impl Fn(&Arc<AppState>) + Send + Sync + 'static,
    ) -> ListenerId {
        self.store.subscribe(listener).await
    }

    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        self.store.unsubscribe(id).await
    }

    /// Trigger all three fetches and wait for every one of them to settle.
    ///
    /// Failures are already recorded in their partitions; the returned
    /// snapshot reflects all three outcomes.
    pub async fn refresh_all(&self) -> Arc<AppState> {
        let (news, movers, watchlist) = futures_util::future::join3(
            self.news().fetch(),
            self.top_movers().fetch(),
            self.watchlist().fetch(),
        )
        .await;
        tracing::debug!(
            news_ok = news.is_ok(),
            topmovers_ok = movers.is_ok(),
            watchlist_ok = watchlist.is_ok(),
            "refresh_all settled"
        );
        self.store.snapshot().await
    }

    pub(crate) fn next_request_id(&self) -> RequestId {
        RequestId(self.request_seq.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinwatchClientBuilder {
    quote_url: String,
    news_url: String,
    currency: String,
    watchlist: Vec<String>,
    top_movers_universe: Vec<String>,
    top_movers_limit: usize,
    timeout: Duration,
    reference: Option<Arc<ReferenceTable>>,
    transport: Option<Arc<dyn Transport>>,
    middleware: Vec<Arc<dyn Middleware>>,
    log_actions: bool,
}

impl Default for CoinwatchClientBuilder {
    fn default() -> Self {
        Self {
            quote_url: network::DEFAULT_QUOTE_URL.to_string(),
            news_url: network::DEFAULT_NEWS_URL.to_string(),
            currency: network::DEFAULT_CURRENCY.to_string(),
            watchlist: network::DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
            top_movers_universe: network::DEFAULT_TOP_MOVERS_UNIVERSE
                .iter()
                .map(|s| s.to_string())
                .collect(),
            top_movers_limit: network::DEFAULT_TOP_MOVERS_LIMIT,
            timeout: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
            reference: None,
            transport: None,
            middleware: Vec::new(),
            log_actions: true,
        }
    }
}

impl CoinwatchClientBuilder {
    pub fn quote_url(mut self, url: &str) -> Self {
        self.quote_url = url.to_string();
        self
    }

    pub fn news_url(mut self, url: &str) -> Self {
        self.news_url = url.to_string();
        self
    }

    /// Point both gateways at the same host.
    pub fn base_url(self, url: &str) -> Self {
        self.quote_url(url).news_url(url)
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn watchlist<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watchlist = tickers.into_iter().map(Into::into).collect();
        self
    }

    pub fn top_movers_universe<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.top_movers_universe = tickers.into_iter().map(Into::into).collect();
        self
    }

    pub fn top_movers_limit(mut self, limit: usize) -> Self {
        self.top_movers_limit = limit;
        self
    }

    /// Request timeout for the default reqwest transport.
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the bundled symbol table.
    pub fn reference(mut self, table: ReferenceTable) -> Self {
        self.reference = Some(Arc::new(table));
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Append a middleware. Runs after the action logger, in insertion order.
    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn log_actions(mut self, enabled: bool) -> Self {
        self.log_actions = enabled;
        self
    }

    pub fn build(self) -> Result<CoinwatchClient, CoinwatchError> {
        validate_url("quote_url", &self.quote_url)?;
        validate_url("news_url", &self.news_url)?;

        let currency = Ticker::parse(&self.currency)
            .map_err(|e| CoinwatchError::Validation(format!("currency: {}", e)))?;
        let watchlist = Ticker::parse_all(&self.watchlist)
            .map_err(|e| CoinwatchError::Validation(format!("watchlist: {}", e)))?;
        let universe = Ticker::parse_all(&self.top_movers_universe)
            .map_err(|e| CoinwatchError::Validation(format!("top_movers_universe: {}", e)))?;

        let mut seen = HashSet::new();
        if let Some(dup) = watchlist.iter().find(|t| !seen.insert(*t)) {
            return Err(CoinwatchError::Validation(format!(
                "watchlist: duplicate ticker {}",
                dup
            )));
        }
        if self.top_movers_limit == 0 {
            return Err(CoinwatchError::Validation(
                "top_movers_limit must be greater than zero".to_string(),
            ));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout)?,
        };
        let reference = self.reference.unwrap_or_else(ReferenceTable::bundled);

        let mut middleware: Vec<Arc<dyn Middleware>> = Vec::new();
        if self.log_actions {
            middleware.push(Arc::new(ActionLogger));
        }
        middleware.extend(self.middleware);

        let quotes = QuoteGateway::new(
            transport.clone(),
            &self.quote_url,
            currency.as_str(),
            reference,
        );

        Ok(CoinwatchClient {
            store: Arc::new(Store::with_middleware(AppState::default(), middleware)),
            top_movers: TopMoversGateway::new(quotes.clone(), universe, self.top_movers_limit),
            news: NewsGateway::new(transport, &self.news_url),
            quotes,
            watchlist_tickers: watchlist,
            request_seq: Arc::new(AtomicU64::new(0)),
        })
    }
}

fn validate_url(field: &str, url: &str) -> Result<(), CoinwatchError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(CoinwatchError::Validation(format!(
            "{}: expected an http(s) URL, got {:?}",
            field, url
        )))
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, CoinwatchError> {
    Ok(Arc::new(crate::http::HttpTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, CoinwatchError> {
    Err(CoinwatchError::Validation(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::HttpResponse;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _url: &str) -> Result<HttpResponse, HttpError> {
            Err(HttpError::Transport("unreachable".into()))
        }
    }

    fn builder() -> CoinwatchClientBuilder {
        CoinwatchClient::builder().transport(Arc::new(Unreachable))
    }

    #[test]
    fn test_defaults_build() {
        let client = builder().build().unwrap();
        let watchlist = client.watchlist();
        let tickers: Vec<&str> = watchlist.tickers().iter().map(Ticker::as_str).collect();
        assert_eq!(tickers, vec!["BTC", "XRP", "BCH", "ETH", "DOGE", "LTC"]);
        assert_eq!(client.quotes.currency(), "USD");
    }

    #[test]
    fn test_tickers_are_normalized() {
        let client = builder().watchlist(["btc", " eth "]).build().unwrap();
        let watchlist = client.watchlist();
        let tickers: Vec<&str> = watchlist.tickers().iter().map(Ticker::as_str).collect();
        assert_eq!(tickers, vec!["BTC", "ETH"]);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            builder().quote_url("ftp://example.com").build(),
            Err(CoinwatchError::Validation(_))
        ));
        assert!(matches!(
            builder().currency("US-D").build(),
            Err(CoinwatchError::Validation(_))
        ));
        assert!(matches!(
            builder().watchlist(["BTC", "btc"]).build(),
            Err(CoinwatchError::Validation(_))
        ));
        assert!(matches!(
            builder().watchlist(["BTC", ""]).build(),
            Err(CoinwatchError::Validation(_))
        ));
        assert!(matches!(
            builder().top_movers_limit(0).build(),
            Err(CoinwatchError::Validation(_))
        ));
    }

    #[test]
    fn test_request_ids_are_fresh_across_clones() {
        let client = builder().build().unwrap();
        let other = client.clone();
        let a = client.next_request_id();
        let b = other.next_request_id();
        assert_ne!(a, b);
        assert!(Arc::ptr_eq(client.store(), other.store()));
    }

    #[test]
    fn test_transport_failure_lands_in_partition() {
        let client = builder().build().unwrap();
        let err = tokio_test::block_on(client.watchlist().fetch()).unwrap_err();
        assert_eq!(
            err.message,
            "Failed to fetch prices: Transport failure: unreachable"
        );

        let state = tokio_test::block_on(client.watchlist().state());
        assert!(!state.loading());
        assert_eq!(state.error(), Some(err.message.as_str()));
        assert!(state.data().is_empty());
    }
}
