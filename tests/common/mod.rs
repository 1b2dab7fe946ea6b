//! Shared fixtures for integration tests.

#![allow(dead_code)]

use coinwatch::client::{CoinwatchClient, CoinwatchClientBuilder};
use coinwatch::error::HttpError;
use coinwatch::http::{HttpResponse, Transport};
use coinwatch::reference::{ReferenceEntry, ReferenceTable};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Reply = Result<HttpResponse, HttpError>;

/// Transport that answers requests from a script, in request order.
///
/// A scripted reply can be released later through the sender returned by
/// [`ScriptedTransport::gate`], which lets tests control completion order.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    urls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a reply that is already available.
    pub fn enqueue(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.script.lock().unwrap().push_back(rx);
    }

    pub fn enqueue_ok(&self, body: &str) {
        self.enqueue(Ok(HttpResponse::ok(body)));
    }

    /// Queue a reply that is held back until the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(rx);
        tx
    }

    /// Every URL requested so far.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    /// Yield to spawned fetches until `n` requests have been issued.
    pub async fn wait_for_requests(&self, n: usize) {
        for _ in 0..1000 {
            if self.request_count() >= n {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} requests, saw {}", n, self.request_count());
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Reply {
        self.urls.lock().unwrap().push(url.to_string());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(HttpError::Transport("reply dropped".into()))),
            None => Err(HttpError::Transport(format!("no scripted reply for {}", url))),
        }
    }
}

/// Reference table where BTC is id 1 "Bitcoin" and XRP is id 2 "XRP".
pub fn small_reference() -> ReferenceTable {
    ReferenceTable::from_entries([
        ReferenceEntry {
            id: 1,
            name: "Bitcoin".into(),
            symbol: "BTC".into(),
        },
        ReferenceEntry {
            id: 2,
            name: "XRP".into(),
            symbol: "XRP".into(),
        },
    ])
}

pub fn builder(transport: Arc<ScriptedTransport>) -> CoinwatchClientBuilder {
    CoinwatchClient::builder()
        .transport(transport)
        .reference(small_reference())
        .watchlist(["BTC", "XRP"])
        .log_actions(false)
}

pub const BTC_XRP_QUOTES: &str = r#"{
    "RAW": {
        "BTC": {"USD": {"FROMSYMBOL": "BTC", "PRICE": 50000.0, "CHANGEPCT24HOUR": 2.5}},
        "XRP": {"USD": {"FROMSYMBOL": "XRP", "PRICE": 0.5, "CHANGEPCT24HOUR": -1.2}}
    }
}"#;

pub fn quotes_body(rows: &[(&str, &str, &str)]) -> String {
    let entries: Vec<String> = rows
        .iter()
        .map(|(sym, price, change)| {
            format!(
                r#""{sym}": {{"USD": {{"FROMSYMBOL": "{sym}", "PRICE": {price}, "CHANGEPCT24HOUR": {change}}}}}"#
            )
        })
        .collect();
    format!(r#"{{"RAW": {{{}}}}}"#, entries.join(","))
}

pub const NEWS_FEED: &str = r#"{
    "Type": 100,
    "Message": "News list successfully returned",
    "Data": [
        {
            "id": "1001",
            "published_on": 1700000000,
            "imageurl": "https://images.example.com/1.png",
            "title": "Bitcoin climbs",
            "url": "https://news.example.com/1",
            "source": "coindesk",
            "body": "Prices rose.",
            "categories": "BTC|Market",
            "source_info": {"name": "CoinDesk"}
        },
        {
            "id": 1002,
            "published_on": 1700000600,
            "title": "XRP update",
            "url": "https://news.example.com/2",
            "source": "cointelegraph"
        }
    ]
}"#;

/// Transport that answers by inspecting the URL. Order-independent.
pub struct RoutedTransport<F> {
    route: F,
}

impl<F> RoutedTransport<F>
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    pub fn new(route: F) -> Arc<Self> {
        Arc::new(Self { route })
    }
}

#[async_trait::async_trait]
impl<F> Transport for RoutedTransport<F>
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    async fn get(&self, url: &str) -> Reply {
        (self.route)(url)
    }
}

/// Yield to spawned fetches until no partition is loading.
pub async fn settled(client: &CoinwatchClient) -> Arc<coinwatch::state::AppState> {
    for _ in 0..1000 {
        let state = client.snapshot().await;
        if state.statuses().iter().all(|s| !s.loading) {
            return state;
        }
        tokio::task::yield_now().await;
    }
    panic!("partitions still loading");
}
