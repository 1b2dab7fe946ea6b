//! Shared newtypes and serde helpers used across domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the providers send.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// Longest ticker symbol accepted.
pub const MAX_TICKER_LEN: usize = 10;

/// An exchange ticker symbol, e.g. `"BTC"`.
///
/// Always upper-case ASCII alphanumeric, 1 to [`MAX_TICKER_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticker(String);

/// Rejected ticker input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ticker {0:?}: expected 1-10 ASCII letters or digits")]
pub struct InvalidTicker(pub String);

impl Ticker {
    /// Parse and normalize (upper-case) a ticker symbol.
    pub fn parse(s: &str) -> Result<Self, InvalidTicker> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_TICKER_LEN
            || !trimmed.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(InvalidTicker(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a list of symbols, failing on the first invalid one.
    pub fn parse_all<I, S>(symbols: I) -> Result<Vec<Ticker>, InvalidTicker>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        symbols.into_iter().map(|s| Ticker::parse(s.as_ref())).collect()
    }

    /// Comma-join tickers for a multi-symbol query parameter.
    pub fn join(tickers: &[Ticker]) -> String {
        tickers
            .iter()
            .map(Ticker::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = InvalidTicker;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ticker::parse(s)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ticker::parse(&s).map_err(serde::de::Error::custom)
    }
}
