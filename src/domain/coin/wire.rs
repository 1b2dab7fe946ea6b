//! Wire types for the `pricemultifull` quote endpoint.

use crate::shared::serde_util::decimal_number;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level body. On provider-side failures the endpoint still answers 200
/// but with `Response: "Error"` and no `RAW` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceMultiFullResponse {
    #[serde(rename = "RAW", default)]
    pub raw: Option<HashMap<String, HashMap<String, RawQuote>>>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl PriceMultiFullResponse {
    /// The provider's in-band error message, if this body is an error envelope.
    pub fn provider_error(&self) -> Option<String> {
        match self.response.as_deref() {
            Some(r) if r.eq_ignore_ascii_case("error") => Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "unknown provider error".to_string()),
            ),
            _ => None,
        }
    }
}

/// Per-symbol, per-currency raw quote. Only the fields we map are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "FROMSYMBOL", default)]
    pub from_symbol: Option<String>,
    #[serde(rename = "PRICE", with = "decimal_number")]
    pub price: Decimal,
    #[serde(rename = "CHANGEPCT24HOUR", with = "decimal_number")]
    pub change_pct_24h: Decimal,
}
