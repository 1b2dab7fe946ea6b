//! # coinwatch
//!
//! Async data-synchronization layer for a crypto watchlist app.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Ticker newtype, domain models (`Coin`, `NewsItem`) with their wire schemas and gateways, bundled reference table
//! 2. **Transport**: `Transport` trait with a `reqwest` implementation behind the `http` feature
//! 3. **State**: partitions, actions, the `Store` with middleware, memoized selectors, async slices
//! 4. **High-Level Client**: `CoinwatchClient` with per-slice sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinwatch::prelude::*;
//!
//! let client = CoinwatchClient::builder().build()?;
//!
//! let handle = client.watchlist().trigger().await; // partition is now loading
//! let coins = handle.await?;
//!
//! let watchlist = watchlist_selector();
//! let view = watchlist.select(&client.snapshot().await);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, gateways.
pub mod domain;

/// Bundled symbol → `{id, name}` table.
pub mod reference;

/// Unified error types.
pub mod error;

/// Endpoint and default-configuration constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// HTTP transport seam.
pub mod http;

// ── Layer 3: State ───────────────────────────────────────────────────────────

/// Partitions, actions, store, middleware, selectors.
pub mod state;

/// Async slices: trigger → pending → fulfilled / rejected.
pub mod slices;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinwatchClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Ticker;

    // Domain types
    pub use crate::domain::coin::{Coin, QuoteGateway, TopMoversGateway};
    pub use crate::domain::news::{NewsGateway, NewsItem};
    pub use crate::reference::{ReferenceEntry, ReferenceTable};

    // Errors
    pub use crate::error::{CoinwatchError, FetchError, GatewayError, HttpError};

    // Transport
    pub use crate::http::{HttpResponse, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::HttpTransport;

    // State
    pub use crate::slices::FetchHandle;
    pub use crate::state::{
        home_selector, news_selector, top_movers_selector, watchlist_selector, Action,
        ActionLogger, AppState, HomeView, Middleware, Phase, SliceKey, SlicePartition, Store,
    };

    // Client + sub-clients
    pub use crate::client::{
        CoinwatchClient, CoinwatchClientBuilder, NewsClient, TopMoversClient, WatchlistClient,
    };
}
