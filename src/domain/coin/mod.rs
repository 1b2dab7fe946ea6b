//! Coin domain: tradable assets with a live quote.

mod convert;
pub mod gateway;
pub mod wire;

pub use convert::map_quotes;
pub use gateway::{QuoteGateway, TopMoversGateway};

use crate::shared::Ticker;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A tradable asset with its latest quote.
///
/// Rebuilt from scratch on every fetch. Equality and hashing only look at
/// `(id, symbol)`, which is what list diffing and drag-reordering key on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: u32,
    pub name: String,
    pub symbol: Ticker,
    pub price: Decimal,
    /// 24-hour change in percent, signed.
    pub percent_change: Decimal,
}

impl Coin {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        symbol: Ticker,
        price: Decimal,
        percent_change: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol,
            price,
            percent_change,
        }
    }

    /// Whether the ticker was missing from the reference dataset.
    pub fn is_unresolved(&self) -> bool {
        self.id == crate::reference::UNKNOWN_ID
    }

    pub fn is_gaining(&self) -> bool {
        self.percent_change > Decimal::ZERO
    }
}

impl PartialEq for Coin {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.symbol == other.symbol
    }
}

impl Eq for Coin {}

impl Hash for Coin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.symbol.hash(state);
    }
}
