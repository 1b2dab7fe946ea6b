//! Bundled CoinMarketCap listing subset: `(id, name, symbol)`.

pub(super) const BUNDLED: &[(u32, &str, &str)] = &[
    (1, "Bitcoin", "BTC"),
    (2, "Litecoin", "LTC"),
    (52, "XRP", "XRP"),
    (74, "Dogecoin", "DOGE"),
    (328, "Monero", "XMR"),
    (512, "Stellar", "XLM"),
    (825, "Tether", "USDT"),
    (1027, "Ethereum", "ETH"),
    (1321, "Ethereum Classic", "ETC"),
    (1831, "Bitcoin Cash", "BCH"),
    (1839, "BNB", "BNB"),
    (1958, "TRON", "TRX"),
    (1975, "Chainlink", "LINK"),
    (2010, "Cardano", "ADA"),
    (2011, "Tezos", "XTZ"),
    (3408, "USD Coin", "USDC"),
    (3794, "Cosmos", "ATOM"),
    (3890, "Polygon", "MATIC"),
    (4172, "Terra Classic", "LUNC"),
    (5426, "Solana", "SOL"),
    (5805, "Avalanche", "AVAX"),
    (5994, "Shiba Inu", "SHIB"),
    (6636, "Polkadot", "DOT"),
    (7083, "Uniswap", "UNI"),
    (7278, "Aave", "AAVE"),
];
