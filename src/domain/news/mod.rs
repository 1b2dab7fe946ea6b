//! News domain: articles shown in the home feed and the news tab.

mod convert;
pub mod gateway;
pub mod wire;

pub use gateway::NewsGateway;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article, passed through from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// Human-readable publisher name.
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub body: Option<String>,
    pub categories: Vec<String>,
}
