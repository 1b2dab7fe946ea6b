//! Network URL constants and request defaults.

/// Default base URL for the quote endpoint (CryptoCompare min-api).
pub const DEFAULT_QUOTE_URL: &str = "https://min-api.cryptocompare.com";

/// Default base URL for the news endpoint.
pub const DEFAULT_NEWS_URL: &str = "https://min-api.cryptocompare.com";

/// Quote currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Request timeout applied by the default HTTP transport, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tickers shown on the watchlist until the user curates their own.
pub const DEFAULT_WATCHLIST: [&str; 6] = ["BTC", "XRP", "BCH", "ETH", "DOGE", "LTC"];

/// Tickers scanned for the top-movers list.
pub const DEFAULT_TOP_MOVERS_UNIVERSE: [&str; 12] = [
    "BTC", "ETH", "XRP", "BCH", "LTC", "DOGE", "ADA", "SOL", "DOT", "LINK", "XLM", "UNI",
];

/// Number of coins kept in the top-movers list.
pub const DEFAULT_TOP_MOVERS_LIMIT: usize = 6;
