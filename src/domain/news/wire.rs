//! Wire types for the news endpoint.

use crate::shared::serde_util::timestamp_secs;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The feed is either a bare array or wrapped in the provider envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NewsResponse {
    List(Vec<RawArticle>),
    Envelope {
        #[serde(rename = "Data")]
        data: Vec<RawArticle>,
    },
}

impl NewsResponse {
    pub fn into_articles(self) -> Vec<RawArticle> {
        match self {
            NewsResponse::List(articles) => articles,
            NewsResponse::Envelope { data } => data,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(with = "timestamp_secs")]
    pub published_on: DateTime<Utc>,
    #[serde(default)]
    pub imageurl: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Pipe-separated category list, e.g. `"BTC|Trading"`.
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub source_info: Option<RawSourceInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSourceInfo {
    #[serde(default)]
    pub name: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }
    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}
