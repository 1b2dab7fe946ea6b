//! Static reference dataset: ticker symbol → stable numeric id and display name.
//!
//! Consulted synchronously by the quote gateway; never refreshed over the
//! network. The bundled table can be replaced through the client builder.

mod data;

use crate::shared::Ticker;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Id used when a ticker has no reference entry.
pub const UNKNOWN_ID: u32 = 0;

/// Name used when a ticker has no reference entry.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One row of the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: u32,
    pub name: String,
    pub symbol: String,
}

lazy_static! {
    static ref BUNDLED_TABLE: Arc<ReferenceTable> = Arc::new(ReferenceTable::from_entries(
        data::BUNDLED.iter().map(|(id, name, symbol)| ReferenceEntry {
            id: *id,
            name: (*name).to_string(),
            symbol: (*symbol).to_string(),
        }),
    ));
}

/// Symbol-indexed lookup table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    by_symbol: HashMap<String, ReferenceEntry>,
}

impl ReferenceTable {
    /// The table shipped with the crate.
    pub fn bundled() -> Arc<ReferenceTable> {
        BUNDLED_TABLE.clone()
    }

    /// Build a table from entries. Symbols are matched case-insensitively;
    /// on duplicate symbols the first entry wins.
    pub fn from_entries(entries: impl IntoIterator<Item = ReferenceEntry>) -> Self {
        let mut by_symbol = HashMap::new();
        for entry in entries {
            by_symbol
                .entry(entry.symbol.to_ascii_uppercase())
                .or_insert(entry);
        }
        Self { by_symbol }
    }

    pub fn lookup(&self, ticker: &Ticker) -> Option<&ReferenceEntry> {
        self.by_symbol.get(ticker.as_str())
    }

    /// Resolve `(id, name)`, substituting the unknown sentinel on a miss.
    pub fn resolve(&self, ticker: &Ticker) -> (u32, String) {
        match self.lookup(ticker) {
            Some(entry) => (entry.id, entry.name.clone()),
            None => (UNKNOWN_ID, UNKNOWN_NAME.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
